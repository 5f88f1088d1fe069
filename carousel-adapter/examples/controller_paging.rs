// Example: tween-driven programmatic paging with mid-flight retargeting.
use carousel::CarouselOptions;
use carousel_adapter::{Controller, Easing};

fn main() {
    let mut c: Controller<u64> = Controller::new(CarouselOptions::new(5, 300));
    c.set_easing(Easing::SmoothStep);

    c.request_index(4, 0);
    for now_ms in [0u64, 50, 100] {
        if let Some(offset) = c.tick(now_ms) {
            println!("t={now_ms}ms offset={offset}");
        }
    }

    // Supersede the scroll mid-flight: the latest request wins and the
    // viewport glides from wherever it currently is.
    c.request_index(1, 100);
    for now_ms in [150u64, 250, 350] {
        if let Some(offset) = c.tick(now_ms) {
            println!("t={now_ms}ms offset={offset}");
        }
    }

    println!(
        "settled_index={} animating={}",
        c.carousel().settled_index(),
        c.is_animating()
    );
}
