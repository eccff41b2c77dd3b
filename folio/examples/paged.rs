// Example: the three-card paged carousel with wraparound buttons and drag steps.
use folio::PagedCarousel;

fn print(c: &PagedCarousel) {
    let roles: Vec<_> = (0..c.count()).map(|i| c.role(i)).collect();
    println!("selected={:?} roles={roles:?}", c.selected());
}

fn main() {
    let mut c = PagedCarousel::new(5);
    print(&c);
    c.previous();
    print(&c);
    c.on_drag_end(-120.0);
    print(&c);
    c.click(3);
    print(&c);
}
