use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use neon_deck::core::scene::{CursorTrail, ParticleField, WireframeStarfield};
use neon_deck::core::{Deck, GridBuffer, Scene, SceneEvent, SceneRng};
use neon_deck::engine::{Driver, ManualClock, Clock};
use neon_deck::types::{Direction, InputEvent, GRID_HEIGHT, GRID_WIDTH};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// One test per binary: the counter is global.
#[test]
fn steady_state_ticks_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut particles = ParticleField::new(GRID_WIDTH, GRID_HEIGHT, SceneRng::new(7));
    let mut trail = CursorTrail::new(GRID_WIDTH, GRID_HEIGHT);
    let mut wire = WireframeStarfield::new(GRID_WIDTH, GRID_HEIGHT, SceneRng::new(8));
    let mut grid = GridBuffer::new(GRID_WIDTH, GRID_HEIGHT);

    let deck = Deck::new(vec![
        Scene::Particles(ParticleField::new(GRID_WIDTH, GRID_HEIGHT, SceneRng::new(9))),
        Scene::Trail(CursorTrail::new(GRID_WIDTH, GRID_HEIGHT)),
    ]);
    let mut driver = Driver::new(deck, GRID_WIDTH, GRID_HEIGHT);
    let mut clock = ManualClock::new(0);
    driver.start(clock.now_ms());

    // Warm-up: fill pools and the pending-tick list.
    for _ in 0..500 {
        particles.advance(SceneEvent::Tick);
        clock.advance(10);
        driver.pump(clock.now_ms());
    }
    for i in 0..40 {
        trail.advance(SceneEvent::Input(InputEvent::Pointer { x: i, y: 5, click: i % 7 == 0 }));
        trail.advance(SceneEvent::Tick);
    }

    let allocs = with_alloc_counting(|| {
        for i in 0..1_000 {
            particles.advance(SceneEvent::Tick);
            wire.advance(SceneEvent::Tick);
            trail.advance(SceneEvent::Input(InputEvent::Pointer {
                x: i % 60,
                y: 8,
                click: i % 50 == 0,
            }));
            trail.advance(SceneEvent::Tick);
        }

        grid.clear();
        wire.render(&mut grid);
        grid.clear();
        trail.render(&mut grid);

        for step in 0..400u64 {
            if step == 200 {
                let _ = driver.handle_input(InputEvent::Navigate(Direction::Next), clock.now_ms());
            }
            clock.advance(10);
            driver.pump(clock.now_ms());
            driver.frame();
        }
    });

    assert_eq!(allocs, 0);
}
