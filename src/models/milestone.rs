/// Day thresholds shown as the milestone checklist.
pub const MILESTONES: [u32; 5] = [30, 60, 90, 120, 150];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub day: u32,
    pub label: &'static str,
}

/// Rows of the checkpoint status table.
pub const CHECKPOINTS: [Checkpoint; 7] = [
    Checkpoint { day: 1, label: "First day" },
    Checkpoint { day: 7, label: "First week" },
    Checkpoint { day: 30, label: "Month 1" },
    Checkpoint { day: 60, label: "Month 2" },
    Checkpoint { day: 90, label: "Month 3" },
    Checkpoint { day: 120, label: "Month 4" },
    Checkpoint { day: 150, label: "Goal" },
];

pub fn milestones_reached(days: u32) -> impl Iterator<Item = (u32, bool)> {
    MILESTONES.into_iter().map(move |m| (m, days >= m))
}

pub fn checkpoints_reached(days: u32) -> impl Iterator<Item = (Checkpoint, bool)> {
    CHECKPOINTS.into_iter().map(move |c| (c, days >= c.day))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Warm,
    Calm,
    Hot,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motivation {
    pub min_percentage: u32,
    pub text: &'static str,
    pub tone: Tone,
}

static MOTIVATIONS: [Motivation; 12] = [
    Motivation { min_percentage: 0, text: "🚀 Ready to start!", tone: Tone::Warm },
    Motivation { min_percentage: 10, text: "💪 First steps taken!", tone: Tone::Calm },
    Motivation { min_percentage: 20, text: "🔥 Getting into the rhythm!", tone: Tone::Calm },
    Motivation { min_percentage: 30, text: "📈 Building habits!", tone: Tone::Calm },
    Motivation { min_percentage: 40, text: "🎯 On the right track!", tone: Tone::Warm },
    Motivation { min_percentage: 50, text: "⚡ Halfway there! Don't stop!", tone: Tone::Warm },
    Motivation { min_percentage: 60, text: "🚀 Momentum gained!", tone: Tone::Hot },
    Motivation { min_percentage: 70, text: "💎 Advanced level!", tone: Tone::Hot },
    Motivation { min_percentage: 80, text: "🏆 Almost ready!", tone: Tone::Hot },
    Motivation { min_percentage: 90, text: "🔥 Final push!", tone: Tone::Urgent },
    Motivation { min_percentage: 99, text: "🎯 One more step!", tone: Tone::Urgent },
    Motivation { min_percentage: 100, text: "🎉 GOAL REACHED!", tone: Tone::Calm },
];

/// Highest tier whose threshold does not exceed `percentage`.
pub fn motivation_for(percentage: u32) -> &'static Motivation {
    MOTIVATIONS
        .iter()
        .rev()
        .find(|m| percentage >= m.min_percentage)
        .unwrap_or(&MOTIVATIONS[0])
}

/// Colour band of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTier {
    Starting,
    Early,
    Middle,
    Advanced,
    Closing,
    Done,
}

impl BarTier {
    pub fn for_percentage(percentage: u32) -> Self {
        match percentage {
            0..20 => BarTier::Starting,
            20..40 => BarTier::Early,
            40..60 => BarTier::Middle,
            60..80 => BarTier::Advanced,
            80..100 => BarTier::Closing,
            _ => BarTier::Done,
        }
    }
}

/// Human label for the manual adjustment.
pub fn adjustment_label(offset: i64) -> String {
    match offset {
        o if o > 0 => format!("+{} extra days", o),
        o if o < 0 => format!("{} rest days", o),
        _ => "No adjustments (pure automatic)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_reached() {
        let reached: Vec<u32> = milestones_reached(95)
            .filter(|(_, done)| *done)
            .map(|(m, _)| m)
            .collect();
        assert_eq!(reached, vec![30, 60, 90]);
        assert_eq!(milestones_reached(0).filter(|(_, d)| *d).count(), 0);
        assert_eq!(milestones_reached(150).filter(|(_, d)| *d).count(), 5);
    }

    #[test]
    fn test_checkpoints_reached() {
        let done: Vec<&str> = checkpoints_reached(7)
            .filter(|(_, d)| *d)
            .map(|(c, _)| c.label)
            .collect();
        assert_eq!(done, vec!["First day", "First week"]);
    }

    #[test]
    fn test_motivation_tiers() {
        assert_eq!(motivation_for(0).min_percentage, 0);
        assert_eq!(motivation_for(9).min_percentage, 0);
        assert_eq!(motivation_for(50).min_percentage, 50);
        assert_eq!(motivation_for(98).min_percentage, 90);
        assert_eq!(motivation_for(99).min_percentage, 99);
        assert_eq!(motivation_for(100).tone, Tone::Calm);
    }

    #[test]
    fn test_bar_tier_bands() {
        assert_eq!(BarTier::for_percentage(0), BarTier::Starting);
        assert_eq!(BarTier::for_percentage(19), BarTier::Starting);
        assert_eq!(BarTier::for_percentage(20), BarTier::Early);
        assert_eq!(BarTier::for_percentage(79), BarTier::Advanced);
        assert_eq!(BarTier::for_percentage(99), BarTier::Closing);
        assert_eq!(BarTier::for_percentage(100), BarTier::Done);
    }

    #[test]
    fn test_adjustment_label() {
        assert_eq!(adjustment_label(3), "+3 extra days");
        assert_eq!(adjustment_label(-2), "-2 rest days");
        assert_eq!(adjustment_label(0), "No adjustments (pure automatic)");
    }
}
