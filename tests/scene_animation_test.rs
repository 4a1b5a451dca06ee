//! Whole-scene behaviour through the public `Scene` enum.

use neon_deck::core::scene::{credits, BarGrowth, ColorGradient, CreditsScroll};
use neon_deck::core::{standard_scenes, GridBuffer, Scene, SceneEvent, SceneRng};
use neon_deck::types::{CellTag, GRID_HEIGHT, GRID_WIDTH};

fn run_until_idle(scene: &mut Scene, limit: usize) -> usize {
    let mut ticks = 0;
    if scene.activate().is_none() {
        return ticks;
    }
    while scene.advance(SceneEvent::Tick).is_some() {
        ticks += 1;
        assert!(ticks < limit, "{} never settled", scene.title());
    }
    ticks + 1
}

#[test]
fn credits_roll_then_show_the_full_list() {
    let lines = credits::default_credits();
    let count = lines.len();
    let mut scene = Scene::Credits(CreditsScroll::new(lines.clone(), GRID_HEIGHT));

    let ticks = run_until_idle(&mut scene, 1_000);
    // Lead-in of five blank lines, every credit, then one viewport of scroll-out.
    assert_eq!(ticks, 5 + count + GRID_HEIGHT as usize + 1);
    assert!(!scene.is_animating());
    assert_eq!(scene.activate(), None);

    let mut grid = GridBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    scene.render(&mut grid);
    assert_eq!(grid.row_text(0).trim(), lines[0]);
    let first_x = (GRID_WIDTH as i32 - lines[0].len() as i32) / 2;
    assert_eq!(grid.get(first_x, 0).map(|c| c.tag), Some(CellTag::Heading));
    assert_eq!(grid.row_text(1).trim(), lines[1]);
    assert_eq!(grid.row_text(count as i32 - 1).trim(), lines[count - 1]);
}

#[test]
fn bars_settle_on_their_targets() {
    let bars = BarGrowth::new("chart", &[("a", 22), ("b", 31)], 35, SceneRng::new(3));
    let mut scene = Scene::Bars(bars);
    let ticks = run_until_idle(&mut scene, 100);
    assert!((16..=31).contains(&ticks), "{ticks}");
    match &scene {
        Scene::Bars(b) => assert_eq!(b.values(), b.targets()),
        _ => unreachable!(),
    }
}

#[test]
fn paused_scene_resumes_where_it_stopped() {
    let mut scene = Scene::Gradient(ColorGradient::default());
    scene.activate();
    for _ in 0..10 {
        scene.advance(SceneEvent::Tick);
    }
    let before = match &scene {
        Scene::Gradient(g) => g.progress(),
        _ => unreachable!(),
    };
    assert!(scene.activate().is_some());
    let after = match &scene {
        Scene::Gradient(g) => g.progress(),
        _ => unreachable!(),
    };
    assert_eq!(before, after);
}

#[test]
fn same_seed_replays_identical_frames() {
    let render_after = |seed: u64, ticks: usize| {
        let mut scenes = standard_scenes(seed, GRID_WIDTH, GRID_HEIGHT);
        let mut frames = Vec::new();
        for scene in &mut scenes {
            scene.activate();
            for _ in 0..ticks {
                scene.advance(SceneEvent::Tick);
            }
            let mut grid = GridBuffer::new(GRID_WIDTH, GRID_HEIGHT);
            scene.render(&mut grid);
            frames.push(grid);
        }
        frames
    };
    assert_eq!(render_after(77, 40), render_after(77, 40));
}

#[test]
fn every_standard_scene_stays_inside_the_grid() {
    let mut scenes = standard_scenes(5, GRID_WIDTH, GRID_HEIGHT);
    let mut grid = GridBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    for scene in &mut scenes {
        scene.activate();
        for _ in 0..200 {
            scene.advance(SceneEvent::Tick);
            grid.clear();
            scene.render(&mut grid);
            assert_eq!(grid.cells().len(), GRID_WIDTH as usize * GRID_HEIGHT as usize);
        }
    }
}
