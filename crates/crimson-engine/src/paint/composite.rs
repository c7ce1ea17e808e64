/// How new paint is combined with what is already on the target.
///
/// Mirrors the two canvas `globalCompositeOperation` values the engine supports.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CompositeMode {
    /// Standard premultiplied "over" blending.
    #[default]
    SourceOver,
    /// Additive blending (`lighter`): source and destination are summed.
    Lighter,
}

impl CompositeMode {
    /// Canvas-style name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_canvas_operations() {
        assert_eq!(CompositeMode::default().as_str(), "source-over");
        assert_eq!(CompositeMode::Lighter.as_str(), "lighter");
    }
}
