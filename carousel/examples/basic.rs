// Example: controlled index changes and the settle contract.
use carousel::{Carousel, CarouselOptions};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(3, 300)
            .with_on_index_change(Some(|index| println!("on_index_change({index})"))),
    );

    // Caller-driven change: the engine hands back a scroll target for the
    // surface to animate to.
    if let Some(target) = c.request_index(2) {
        println!("animate to offset {target}");
    }

    // The viewport rests just short of the boundary; rounding lands on the
    // requested page and nothing is reported back (the caller asked).
    c.settle_scroll(598);
    println!("settled_index={}", c.settled_index());

    // A swipe the engine never asked for reports exactly once.
    c.settle_scroll(305);
    println!("settled_index={} nav={:?}", c.settled_index(), c.nav());
}
