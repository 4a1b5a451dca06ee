//! Animated bar chart: every bar grows toward its target.

use super::{draw_title, SceneEvent};
use crate::grid::GridBuffer;
use crate::rng::SceneRng;
use crate::types::{CellTag, TickRequest, BARS_TICK_MS};

const LABEL_WIDTH: i32 = 12;

#[derive(Debug, Clone)]
pub struct BarGrowth {
    title: String,
    labels: Vec<String>,
    values: Vec<u32>,
    targets: Vec<u32>,
    max_value: u32,
    animating: bool,
    rng: SceneRng,
}

impl BarGrowth {
    pub fn new(title: impl Into<String>, bars: &[(&str, u32)], max_value: u32, rng: SceneRng) -> Self {
        let targets: Vec<u32> = bars.iter().map(|(_, t)| *t).collect();
        Self {
            title: title.into(),
            labels: bars.iter().map(|(l, _)| l.to_string()).collect(),
            values: vec![0; targets.len()],
            animating: targets.iter().any(|t| *t > 0),
            targets,
            max_value: max_value.max(1),
            rng,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn targets(&self) -> &[u32] {
        &self.targets
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    fn request(&self) -> Option<TickRequest> {
        self.animating.then_some(TickRequest::after(BARS_TICK_MS))
    }

    pub fn activate(&mut self) -> Option<TickRequest> {
        self.request()
    }

    pub fn advance(&mut self, event: SceneEvent) -> Option<TickRequest> {
        if event != SceneEvent::Tick || !self.animating {
            return None;
        }

        for (value, target) in self.values.iter_mut().zip(&self.targets) {
            if *value < *target {
                let step = self.rng.range_u32(1, 3);
                *value = (*value + step).min(*target);
            }
        }

        if self.values == self.targets {
            self.animating = false;
            log::debug!("bars: all {} bars reached target", self.values.len());
        }
        self.request()
    }

    pub fn render(&self, grid: &mut GridBuffer) {
        draw_title(grid, &self.title);

        let value_width = 4;
        let bar_room = (grid.width() as i32 - LABEL_WIDTH - 1 - value_width).max(0);
        for (i, (label, value)) in self.labels.iter().zip(&self.values).enumerate() {
            let y = 2 + 2 * i as i32;
            grid.put_str(0, y, label, CellTag::Text);

            let len = ((*value).min(self.max_value) as i64 * bar_room as i64 / self.max_value as i64) as i32;
            for dx in 0..len {
                grid.set(LABEL_WIDTH + dx, y, '█', CellTag::Bar);
            }
            grid.put_str(LABEL_WIDTH + len + 1, y, &value.to_string(), CellTag::Text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(targets: &[u32]) -> BarGrowth {
        let bars: Vec<(&str, u32)> = targets.iter().map(|t| ("bar", *t)).collect();
        BarGrowth::new("chart", &bars, 35, SceneRng::new(99))
    }

    #[test]
    fn values_grow_monotonically_and_settle_on_target() {
        let mut bars = chart(&[22, 16, 31, 18, 27]);
        assert!(bars.activate().is_some());

        let mut prev = bars.values().to_vec();
        let mut ticks = 0;
        loop {
            let next = bars.advance(SceneEvent::Tick);
            ticks += 1;
            for ((now, before), target) in bars.values().iter().zip(&prev).zip(bars.targets()) {
                assert!(now >= before);
                assert!(now <= target);
                assert!(*now - *before <= 2);
            }
            prev = bars.values().to_vec();

            let all_done = bars.values() == bars.targets();
            // The stop signal fires on exactly the tick the last bar lands.
            assert_eq!(next.is_none(), all_done);
            if next.is_none() {
                break;
            }
            assert!(ticks <= 31);
        }
        assert!(ticks >= 16, "31 units at <= 2 per tick needs at least 16 ticks");
        assert!(!bars.is_animating());
        assert_eq!(bars.activate(), None);
    }

    #[test]
    fn zero_targets_never_animate() {
        let mut bars = chart(&[0, 0]);
        assert!(!bars.is_animating());
        assert_eq!(bars.activate(), None);
    }

    #[test]
    fn input_does_not_advance_bars() {
        let mut bars = chart(&[10]);
        let ev = SceneEvent::Input(crate::types::InputEvent::Jump);
        assert_eq!(bars.advance(ev), None);
        assert_eq!(bars.values(), &[0]);
    }

    #[test]
    fn renders_label_bar_and_value() {
        let mut bars = chart(&[35]);
        while bars.advance(SceneEvent::Tick).is_some() {}
        let mut grid = GridBuffer::new(40, 4);
        bars.render(&mut grid);
        let row = grid.row_text(2);
        assert!(row.starts_with("bar"));
        assert!(row.contains("35"));
        // Full bar spans the whole room: 40 - 12 - 1 - 4 = 23 cells.
        assert_eq!(grid.count_tag(CellTag::Bar), 23);
    }
}
