/// Rendering and DOM tuning constants for the browser front-end.
///
/// Simulation constants live next to the simulations in `core/`; the values
/// here only affect how things are drawn and where they are attached.

// Click overlay
pub const BIGBANG_CANVAS_ID: &str = "bigbang-canvas";
pub const BIGBANG_Z_INDEX: &str = "9999";
pub const SHOCKWAVE_LINE_WIDTH: f64 = 2.0;
pub const SHOCKWAVE_GLOW: f64 = 20.0;
pub const SHOCKWAVE_ALPHA_SCALE: f32 = 0.5;

// Background scene
pub const SPACE_CANVAS_ID: &str = "space-canvas";
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const FOG_COLOR: [f32; 3] = [0.031, 0.063, 0.161]; // #081029
pub const FOG_DENSITY: f32 = 0.0005;

// Material size in world units and the point size it corresponds to.
pub const NEBULA_MATERIAL: (f32, f32) = (3.0, 4.5);
pub const STARFIELD_MATERIAL: (f32, f32) = (0.15, 1.25);
pub const CONSTELLATION_MATERIAL: (f32, f32) = (0.4, 0.55);
pub const AMBIENT_MATERIAL: (f32, f32) = (0.08, 1.0);

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const SPACE_FALLBACK_BACKGROUND: &str = "radial-gradient(ellipse at 20% 30%, rgba(14, 165, 255, 0.2) 0%, transparent 50%), \
radial-gradient(ellipse at 80% 70%, rgba(139, 92, 246, 0.2) 0%, transparent 50%), \
radial-gradient(ellipse at 50% 50%, rgba(107, 46, 255, 0.15) 0%, transparent 60%), \
radial-gradient(ellipse at 30% 80%, rgba(127, 254, 130, 0.08) 0%, transparent 70%), \
#081029";
pub const SPACE_FALLBACK_ANIMATION: &str = "nebulaPulse 30s ease-in-out infinite";

// Chat widget
pub const CHAT_TYPING_DELAY_MS: i32 = 1500;
pub const CHAT_BUTTON_ID: &str = "astro-chat-button";
pub const CHAT_WIDGET_ID: &str = "astro-chat-widget";
pub const CHAT_CLOSE_ID: &str = "astro-close-btn";
pub const CHAT_MESSAGES_ID: &str = "astro-messages";
pub const CHAT_QUICK_REPLIES_ID: &str = "astro-quick-replies";
pub const CHAT_INPUT_ID: &str = "astro-input";
pub const CHAT_SEND_ID: &str = "astro-send-btn";
pub const CHAT_TYPING_ID: &str = "typing-indicator";

// Forms
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const NEWSLETTER_BUTTON_SELECTOR: &str = ".btn-newsletter";
pub const NEWSLETTER_INPUT_ID: &str = "newsletter-email";
pub const SENDING_LABEL: &str = "Envoi...";
