// Example: swipe settles, arrow guards, and the loading overlay.
use carousel::{Carousel, CarouselOptions};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(4, 320)
            .with_on_index_change(Some(|index| println!("on_index_change({index})"))),
    );

    // Simulated swipes: each settle reports at most once.
    for offset in [330u64, 650, 650, 1280] {
        c.settle_scroll(offset);
        println!(
            "offset={offset} -> settled={} prev_arrow={} next_arrow={}",
            c.settled_index(),
            c.prev_arrow_visible(),
            c.next_arrow_visible()
        );
    }

    // At the last page the next arrow is a guarded no-op.
    assert_eq!(c.next(), None);

    // Image lifecycle for the visible slide.
    let index = c.settled_index();
    c.begin_load(index);
    println!("is_loading({index})={}", c.is_loading(index));
    c.complete_load(index);
    println!("is_loading({index})={}", c.is_loading(index));
}
