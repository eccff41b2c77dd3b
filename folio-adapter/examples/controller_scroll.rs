use folio::CarouselOptions;
use folio_adapter::{Controller, ControllerOptions, Easing, Track};

fn main() {
    // Example: a controller driving the smooth scroll for discrete inputs.
    //
    // An adapter would:
    // - report the viewport size and user scrolling
    // - forward button/dot/wheel input
    // - call tick(now_ms) in a frame loop and apply the returned offset
    let mut c = Controller::new(
        Track::uniform(6, 320).with_gap(16).with_padding(24, 24),
        CarouselOptions::new(0),
        ControllerOptions::default()
            .with_scroll_duration_ms(240)
            .with_easing(Easing::SmoothStep),
    );
    c.on_viewport_size(400);

    c.next(0);
    c.next(30);
    println!("selected={:?}", c.selected());

    let mut now_ms = 30u64;
    while let Some(off) = c.tick(now_ms) {
        if now_ms % 80 == 0 {
            println!("t={now_ms} off={off} mask={:?}", c.edge_mask());
        }
        now_ms += 16;
    }
    println!(
        "done: off={} selected={:?} mode={:?}",
        c.scroll_offset(),
        c.selected(),
        c.reconciler().mode()
    );

    // After the window, a user drag selects the first item in view.
    c.tick(now_ms + 500);
    let picked = c.on_scroll(0, now_ms + 520);
    println!("user scroll picked={picked:?} mask={:?}", c.edge_mask());
}
