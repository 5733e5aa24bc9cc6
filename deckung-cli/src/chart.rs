//! Horizontal terminal rendition of the waterfall bars.

use deckung_quantities::money::Francs;

use crate::core::waterfall::Segment;

const BAR: char = '█';
const AXIS: char = '│';

/// Maps amounts onto character columns; zero is always in range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale {
    min: f64,
    max: f64,
    width: usize,
}

impl Scale {
    pub fn fitting<'a>(segments: impl IntoIterator<Item = &'a Segment>, width: usize) -> Self {
        let (min, max) = segments
            .into_iter()
            .flat_map(|segment| [segment.start, segment.end])
            .fold((Francs::ZERO, Francs::ZERO), |(min, max), value| {
                (min.min(value), max.max(value))
            });
        Self { min: min.into(), max: max.into(), width }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn column(&self, value: Francs) -> usize {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0;
        }
        let ratio = ((f64::from(value) - self.min) / span).clamp(0.0, 1.0);
        (ratio * self.width as f64).round() as usize
    }

    /// Draw the segment as a row of exactly `width` characters.
    pub fn draw(&self, segment: &Segment) -> String {
        let low = self.column(segment.low());
        let high = self.column(segment.high());
        let zero = self.column(Francs::ZERO);
        (0..self.width)
            .map(|column| {
                if (low..high).contains(&column) {
                    BAR
                } else if column == zero {
                    AXIS
                } else {
                    ' '
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        job::JobOrder,
        model::Evaluation,
        waterfall::{Step, layout},
    };

    #[test]
    fn draw_sample_ok() {
        let segments = layout(Step::contribution_margin(&Evaluation::evaluate(&JobOrder::SAMPLE)));
        let scale = Scale::fitting(&segments, 20);

        assert_eq!(scale.draw(&segments[0]), "█".repeat(20));
        assert_eq!(scale.draw(&segments[1]), format!("│{}{}", " ".repeat(12), "█".repeat(7)));
        assert_eq!(scale.draw(&segments[3]), format!("│{}█{}", " ".repeat(11), " ".repeat(7)));
    }

    #[test]
    fn draw_all_zero_ok() {
        let segments = layout(Step::contribution_margin(&Evaluation::evaluate(
            &JobOrder::builder().build(),
        )));
        let scale = Scale::fitting(&segments, 8);
        for segment in &segments {
            assert_eq!(scale.draw(segment), format!("│{}", " ".repeat(7)));
        }
    }

    #[test]
    fn draw_negative_ok() {
        let job =
            JobOrder::builder().revenue(Francs::from(100)).admin_cost(Francs::from(200)).build();
        let segments = layout(Step::contribution_margin(&Evaluation::evaluate(&job)));
        let scale = Scale::fitting(&segments, 6);

        // Scale spans -100..=100, zero lands on the middle column.
        assert_eq!(scale.draw(&segments[0]), "   ███");
        assert_eq!(scale.draw(&segments[3]), "██████");
        assert_eq!(scale.draw(&segments[4]), "███│  ");
    }
}
