use neon_deck::core::GridBuffer;
use neon_deck::term::{style_for, CellStyle, DeckView, Viewport};
use neon_deck::types::{CellTag, Direction, InputEvent, GRID_HEIGHT, GRID_WIDTH};
use neon_deck::{build_default_deck, DeckConfig};

fn config(start_slide: usize) -> DeckConfig {
    DeckConfig {
        seed: 9,
        start_slide,
        log_path: None,
    }
}

#[test]
fn term_view_renders_rounded_corners_around_the_grid() {
    let mut deck = build_default_deck(&config(0));
    deck.start();
    let mut grid = GridBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    deck.render(&mut grid);

    // 60x16 grid + border => 62x18, plus header and footer rows => 62x20.
    let vp = Viewport::new(62, 20);
    let fb = DeckView.render(&deck, &grid, vp);

    assert_eq!(fb.get(0, 1).unwrap().ch, '╭');
    assert_eq!(fb.get(61, 1).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 18).unwrap().ch, '╰');
    assert_eq!(fb.get(61, 18).unwrap().ch, '╯');
    assert_eq!(DeckView.origin(&grid, vp), (1, 2));
}

#[test]
fn term_view_footer_counts_slides() {
    let mut deck = build_default_deck(&config(0));
    deck.start();
    deck.dispatch(neon_deck::core::DeckEvent::Input(InputEvent::Navigate(Direction::Next)));
    deck.dispatch(neon_deck::core::DeckEvent::Input(InputEvent::Navigate(Direction::Next)));
    let mut grid = GridBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    deck.render(&mut grid);

    let fb = DeckView.render(&deck, &grid, Viewport::new(80, 24));
    let footer = (0..24).map(|y| fb.row_text(y)).find(|row| row.contains("[3/8]"));
    assert!(footer.is_some());
    assert!(fb.row_text(2).contains("Throughput per project"));
}

#[test]
fn term_view_maps_tags_to_styles() {
    let mut grid = GridBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    grid.set(0, 0, '█', CellTag::Actor);
    let deck = build_default_deck(&config(7));
    let vp = Viewport::new(62, 20);
    let fb = DeckView.render(&deck, &grid, vp);

    let (ox, oy) = DeckView.origin(&grid, vp);
    let cell = fb.get(ox, oy).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style, style_for(CellTag::Actor));
    assert_ne!(cell.style, CellStyle::default());
}

#[test]
fn term_view_tolerates_a_tiny_terminal() {
    let deck = build_default_deck(&config(0));
    let grid = GridBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    let fb = DeckView.render(&deck, &grid, Viewport::new(10, 4));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 4);
}
