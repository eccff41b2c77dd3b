// Example: feeding a reconciler by hand, the way a UI layer would.
use folio::{CarouselOptions, Reconciler, ScrollProgress};

fn main() {
    let mut r = Reconciler::new(CarouselOptions::new(4).with_on_change(Some(
        |c: folio::SelectionChange| println!("  on_change {:?}", c),
    )));

    // Three quick clicks on "next": one coalesced scroll request.
    r.next(0);
    r.next(10);
    r.next(20);
    println!("scroll_request={:?}", r.take_scroll_request(20));

    // Scroll events from our own smooth scroll keep the window open.
    for now in [40u64, 120, 200] {
        r.on_visibility_changed(1, 1.0);
        r.on_scroll_progress_changed(ScrollProgress::new(0.5, true), now);
        println!("t={now} mode={:?} selected={:?}", r.mode(), r.selected());
    }

    // Window lapses; free scrolling picks the first visible item.
    r.tick(500);
    r.on_visibility_changed(3, 0.0);
    let picked = r.on_scroll_progress_changed(ScrollProgress::new(0.3, true), 510);
    println!("free scroll picked={picked:?} mask={:?}", r.edge_mask());
    println!("wheel={:?}", r.on_wheel(3.0, 600));
}
