// Scroll reveal presets and small page-interaction geometry.

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const RIPPLE_LIFETIME_MS: i32 = 600;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealFrom {
    /// Fade in while rising by this many px.
    Rise(f32),
    /// Fade in while sliding horizontally; sign alternates with index.
    Slide(f32),
    /// Grow from zero scale while spinning this many degrees.
    Spin(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPreset {
    pub selector: &'static str,
    pub from: RevealFrom,
    pub duration_s: f32,
    pub stagger_s: f32,
    pub easing: &'static str,
}

pub const REVEAL_PRESETS: [RevealPreset; 4] = [
    RevealPreset {
        selector: ".service-card",
        from: RevealFrom::Rise(50.0),
        duration_s: 0.8,
        stagger_s: 0.1,
        easing: "cubic-bezier(0.215, 0.61, 0.355, 1)",
    },
    RevealPreset {
        selector: ".case-card",
        from: RevealFrom::Slide(50.0),
        duration_s: 1.0,
        stagger_s: 0.0,
        easing: "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
    },
    RevealPreset {
        selector: ".timeline-planet",
        from: RevealFrom::Spin(360.0),
        duration_s: 1.0,
        stagger_s: 0.15,
        easing: "cubic-bezier(0.34, 1.7, 0.64, 1)",
    },
    RevealPreset {
        selector: "section h2",
        from: RevealFrom::Rise(30.0),
        duration_s: 0.8,
        stagger_s: 0.0,
        easing: "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
    },
];

impl RevealPreset {
    /// `(opacity, transform)` of the hidden state for the `index`-th match.
    pub fn hidden_state(&self, index: usize) -> (&'static str, String) {
        match self.from {
            RevealFrom::Rise(dy) => ("0", format!("translateY({dy}px)")),
            RevealFrom::Slide(dx) => {
                let dx = if index % 2 == 0 { -dx } else { dx };
                ("0", format!("translateX({dx}px)"))
            }
            // scale-in keeps full opacity
            RevealFrom::Spin(deg) => ("1", format!("scale(0) rotate({deg}deg)")),
        }
    }

    /// CSS `transition` value for the `index`-th match.
    pub fn transition(&self, index: usize) -> String {
        let delay = self.stagger_s * index as f32;
        format!(
            "opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s",
            d = self.duration_s,
            e = self.easing,
        )
    }
}

pub const REVEALED_OPACITY: &str = "1";
pub const REVEALED_TRANSFORM: &str = "none";

/// Reverse only when the element leaves through the bottom edge (scrolling
/// back up); leaving through the top keeps it revealed.
#[inline]
pub fn should_hide_on_exit(bounding_top: f64) -> bool {
    bounding_top > 0.0
}

#[inline]
pub fn header_scrolled(page_y_offset: f64) -> bool {
    page_y_offset > HEADER_SCROLL_THRESHOLD
}

/// Square ripple `(size, left, top)` centred on the click, relative to the
/// button's bounding box.
#[inline]
pub fn ripple_box(
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
    client_x: f64,
    client_y: f64,
) -> (f64, f64, f64) {
    let size = rect_width.max(rect_height);
    let left = client_x - rect_left - size / 2.0;
    let top = client_y - rect_top - size / 2.0;
    (size, left, top)
}

/// Join an extra entry onto an inline `transition` list.
pub fn join_transitions(existing: &str, extra: &str) -> String {
    let existing = existing.trim();
    if existing.is_empty() {
        extra.to_string()
    } else {
        format!("{existing}, {extra}")
    }
}

// Hero title: letters fade in one after another.
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";
pub const HERO_LETTER_DELAY_S: f32 = 0.3;
pub const HERO_LETTER_STAGGER_S: f32 = 0.03;
pub const HERO_LETTER_DURATION_S: f32 = 0.05;

// CTA glow and the letter fade are keyframe animations; the rest are
// transitions on individual transform properties so they compose with the
// reveal transform.
pub const EFFECT_KEYFRAMES: &str = "\
@keyframes hair-letter-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes hair-cta-pulse { to { box-shadow: 0 0 60px rgba(14, 165, 255, 0.8); } }";

pub const CTA_SELECTOR: &str = ".btn-primary";
pub const CTA_PULSE_ANIMATION: &str = "hair-cta-pulse 1.5s ease-in-out infinite alternate";

/// Words of the hero title, split on single spaces like the markup expects.
pub fn title_words(text: &str) -> Vec<&str> {
    text.trim().split(' ').collect()
}

#[inline]
pub fn letter_delay_s(index: usize) -> f32 {
    HERO_LETTER_DELAY_S + HERO_LETTER_STAGGER_S * index as f32
}

/// CSS `animation` for the `index`-th letter across the whole title.
pub fn letter_animation(index: usize) -> String {
    format!(
        "hair-letter-in {}s ease-in-out {:.2}s both",
        HERO_LETTER_DURATION_S,
        letter_delay_s(index)
    )
}

// Service card hover.
pub const CARD_HOVER_SCALE: f32 = 1.05;
pub const CARD_HOVER_TRANSITION: &str = "scale 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

#[inline]
pub fn card_scale(hovered: bool) -> f32 {
    if hovered {
        CARD_HOVER_SCALE
    } else {
        1.0
    }
}

// Timeline planet click: grow while adding a full turn, then settle.
pub const PLANET_SPIN_SCALE: f32 = 1.3;
pub const PLANET_SPIN_MS: i32 = 500;
pub const PLANET_SPIN_TRANSITION: &str =
    "rotate 0.5s cubic-bezier(0.34, 2, 0.64, 1), scale 0.5s cubic-bezier(0.34, 2, 0.64, 1)";
pub const PLANET_SETTLE_TRANSITION: &str =
    "rotate 0.5s cubic-bezier(0.34, 2, 0.64, 1), scale 0.3s cubic-bezier(0.45, 0, 0.55, 1)";

/// Accumulated rotation after `turns` clicks.
#[inline]
pub fn planet_rotation_deg(turns: u32) -> f32 {
    360.0 * turns as f32
}

// Portrait tilt follows the pointer inside the wrapper.
pub const PORTRAIT_TILT_DEG: f64 = 20.0;
pub const PORTRAIT_TILT_TRANSITION: &str = "transform 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// `(rotate_y, rotate_x)` in degrees for a pointer at `(client_x, client_y)`
/// over the wrapper's bounding box. Zero for an empty box.
pub fn portrait_tilt(
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
    client_x: f64,
    client_y: f64,
) -> (f64, f64) {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (client_x - rect_left) / rect_width - 0.5;
    let y = (client_y - rect_top) / rect_height - 0.5;
    (x * PORTRAIT_TILT_DEG, -y * PORTRAIT_TILT_DEG)
}

pub fn tilt_transform(rotate_y: f64, rotate_x: f64) -> String {
    format!("rotateY({rotate_y:.2}deg) rotateX({rotate_x:.2}deg)")
}

// Sections drift up while they cross the viewport.
pub const SECTION_PARALLAX_PX: f64 = 50.0;
/// Smoothing that stands in for a scrubbed timeline.
pub const SECTION_PARALLAX_TRANSITION: &str = "translate 1s ease-out";

/// 0 when the section's top touches the viewport bottom, 1 when its bottom
/// leaves through the top.
pub fn scroll_progress(layout_top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - layout_top) / span).clamp(0.0, 1.0)
}

/// Vertical offset in px for a section whose untransformed top sits at
/// `layout_top` in viewport coordinates.
#[inline]
pub fn section_offset(layout_top: f64, height: f64, viewport_height: f64) -> f64 {
    -SECTION_PARALLAX_PX * scroll_progress(layout_top, height, viewport_height)
}
