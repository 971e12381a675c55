use crate::{
    foundation::core::{Fps, Seconds, Size},
    foundation::error::{RevealError, RevealResult},
    page::layout::LayoutConfig,
    section::bento::FeatureBento,
    section::composer::{SectionComposer, SectionPlan},
    section::config::MotionConfig,
    section::header::SectionHeader,
    section::logo::LogoPanel,
    section::showcase::CodeShowcase,
};

/// A concrete page section, tagged by `kind` in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Standalone section header.
    Header(SectionHeader),
    /// Two-panel code showcase.
    CodeShowcase(CodeShowcase),
    /// Feature card grid.
    FeatureBento(FeatureBento),
    /// Logo mark panel.
    Logo(LogoPanel),
}

impl SectionComposer for Section {
    fn plan(&self, motion: &MotionConfig) -> RevealResult<SectionPlan> {
        match self {
            Self::Header(s) => s.plan(motion),
            Self::CodeShowcase(s) => s.plan(motion),
            Self::FeatureBento(s) => s.plan(motion),
            Self::Logo(s) => s.plan(motion),
        }
    }
}

/// One scroll position keyframe.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollKey {
    /// Session time.
    pub at: Seconds,
    /// Vertical scroll offset in pixels.
    pub y: f64,
}

/// Interpolation between scroll keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollInterp {
    /// Jump at each key.
    Hold,
    /// Move linearly between keys.
    #[default]
    Linear,
}

/// Scripted scroll position over time.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollScript {
    /// Keys sorted by `at`.
    #[serde(default)]
    pub keys: Vec<ScrollKey>,
    /// Interpolation mode.
    #[serde(default)]
    pub mode: ScrollInterp,
}

impl ScrollScript {
    /// Script visiting each `(at, y)` pair in order.
    pub fn linear(keys: impl IntoIterator<Item = (f64, f64)>) -> RevealResult<Self> {
        let keys = keys
            .into_iter()
            .map(|(at, y)| Ok(ScrollKey { at: Seconds::new(at)?, y }))
            .collect::<RevealResult<Vec<_>>>()?;
        let script = Self {
            keys,
            mode: ScrollInterp::Linear,
        };
        script.validate()?;
        Ok(script)
    }

    /// Keys must be sorted and finite.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(RevealError::validation("scroll keys must be sorted by 'at'"));
        }
        if self.keys.iter().any(|k| !k.y.is_finite()) {
            return Err(RevealError::validation("scroll key y must be finite"));
        }
        Ok(())
    }

    /// Scroll offset at `now`. Before the first key the first value holds; after the last,
    /// the last value holds. No keys means the page stays at the top.
    pub fn sample(&self, now: Seconds) -> f64 {
        if self.keys.is_empty() {
            return 0.0;
        }
        let idx = self.keys.partition_point(|k| k.at <= now);
        if idx == 0 {
            return self.keys[0].y;
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].y;
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at.get() - a.at.get();
        match self.mode {
            ScrollInterp::Hold => a.y,
            ScrollInterp::Linear if span <= 0.0 => a.y,
            ScrollInterp::Linear => {
                let t = (now.get() - a.at.get()) / span;
                a.y + (b.y - a.y) * t
            }
        }
    }
}

/// Unmount section `section` at session time `at`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduledUnmount {
    /// Index into [`Page::sections`].
    pub section: usize,
    /// Session time.
    pub at: Seconds,
}

/// A page document: viewport, motion defaults, sections and a scripted scroll.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    /// Visible viewport size.
    pub viewport: Size,
    /// Frame rate of the simulated frame loop.
    #[serde(default)]
    pub fps: Fps,
    /// Length of the simulated session.
    pub duration: Seconds,
    /// Motion defaults passed to every section.
    #[serde(default)]
    pub motion: MotionConfig,
    /// Layout metrics.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Sections from top to bottom.
    pub sections: Vec<Section>,
    /// Scroll position over time.
    #[serde(default)]
    pub scroll: ScrollScript,
    /// Sections to unmount during the session.
    #[serde(default)]
    pub unmount: Vec<ScheduledUnmount>,
}

impl Page {
    /// Parse and validate a page from JSON.
    pub fn from_json(json: &str) -> RevealResult<Self> {
        let page: Self = serde_json::from_str(json)?;
        page.validate()?;
        Ok(page)
    }

    /// Check page-level invariants. Section content is validated when planned.
    pub fn validate(&self) -> RevealResult<()> {
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0)
            || !self.viewport.width.is_finite()
            || !self.viewport.height.is_finite()
        {
            return Err(RevealError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        self.motion.validate()?;
        self.layout.validate()?;
        self.scroll.validate()?;
        for u in &self.unmount {
            if u.section >= self.sections.len() {
                return Err(RevealError::validation(format!(
                    "unmount refers to section {} but the page has {}",
                    u.section,
                    self.sections.len()
                )));
            }
        }
        Ok(())
    }

    /// Plan every section with the page's motion config.
    pub fn plans(&self) -> RevealResult<Vec<SectionPlan>> {
        self.sections.iter().map(|s| s.plan(&self.motion)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
