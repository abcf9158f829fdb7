//! Entrance animation policy for chat rows.
//!
//! The policy only produces CSS; rows render their data and accept input
//! whether or not the animation has started or finished. The animation stays
//! paused, delay included, until the row first scrolls into the viewport.

use js_sys::Array;
use shared::config::{MotionConfig, MotionKind};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::{NodeRef, hook, use_effect_with, use_state};

const SLIDE_KEYFRAMES: &str = "chat-row-slide-down";
const FADE_KEYFRAMES: &str = "chat-row-fade-in";

/// How a row enters the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntranceMotion {
    /// Fade in while sliding down from above its resting position.
    SlideDown {
        stagger_secs: f32,
        duration_ms: u32,
        offset_percent: f32,
    },
    /// Fade in on the spot.
    Fade { stagger_secs: f32, duration_ms: u32 },
    /// No entrance animation.
    Still,
}

impl EntranceMotion {
    /// Start delay for the row at `render_index`, in seconds.
    pub fn delay_secs(&self, render_index: usize) -> f32 {
        match self {
            Self::SlideDown { stagger_secs, .. } | Self::Fade { stagger_secs, .. } => {
                #[allow(clippy::cast_precision_loss)]
                let index = render_index as f32;
                stagger_secs * index
            }
            Self::Still => 0.0,
        }
    }

    /// Inline declarations attaching the animation to a row. The animation
    /// only runs once the row has `entered` the viewport.
    pub fn style_for(&self, render_index: usize, entered: bool) -> String {
        let delay = self.delay_secs(render_index);
        let (keyframes, duration_ms) = match self {
            Self::SlideDown { duration_ms, .. } => (SLIDE_KEYFRAMES, duration_ms),
            Self::Fade { duration_ms, .. } => (FADE_KEYFRAMES, duration_ms),
            Self::Still => return String::new(),
        };
        let play_state = if entered { "running" } else { "paused" };
        format!(
            "animation: {keyframes} {duration_ms}ms ease-out {delay:.3}s both; \
             animation-play-state: {play_state};"
        )
    }

    /// Keyframes the list has to inject once for this policy.
    pub fn keyframes(&self) -> String {
        match self {
            Self::SlideDown { offset_percent, .. } => format!(
                "@keyframes {SLIDE_KEYFRAMES} {{ \
                 from {{ opacity: 0; transform: translateY(-{offset_percent}%); }} \
                 to {{ opacity: 1; transform: translateY(0); }} }}"
            ),
            Self::Fade { .. } => format!(
                "@keyframes {FADE_KEYFRAMES} {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}"
            ),
            Self::Still => String::new(),
        }
    }
}

impl From<&MotionConfig> for EntranceMotion {
    fn from(config: &MotionConfig) -> Self {
        match config.kind {
            MotionKind::SlideDown => Self::SlideDown {
                stagger_secs: config.stagger_secs,
                duration_ms: config.duration_ms,
                offset_percent: config.offset_percent,
            },
            MotionKind::Fade => Self::Fade {
                stagger_secs: config.stagger_secs,
                duration_ms: config.duration_ms,
            },
            MotionKind::Still => Self::Still,
        }
    }
}

impl Default for EntranceMotion {
    fn default() -> Self {
        Self::from(&MotionConfig::default())
    }
}

type EntryListener = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Starts observing `element`; `on_enter` fires on the first intersection.
fn observe_entry(
    element: &Element,
    on_enter: impl Fn() + 'static,
) -> Result<(IntersectionObserver, EntryListener), JsValue> {
    let listener = EntryListener::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .is_ok_and(|entry| entry.is_intersecting())
        });
        if intersecting {
            observer.disconnect();
            on_enter();
        }
    });
    let observer = IntersectionObserver::new(listener.as_ref().unchecked_ref())?;
    observer.observe(element);
    Ok((observer, listener))
}

/// Whether the element behind `node` has been inside the viewport at least
/// once since mount.
#[hook]
pub fn use_entered_viewport(node: NodeRef) -> bool {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with(node, move |node| {
            let on_enter = {
                let entered = entered.clone();
                move || entered.set(true)
            };
            let observation = node
                .cast::<Element>()
                .ok_or_else(|| JsValue::from_str("row is not mounted"))
                .and_then(|element| observe_entry(&element, on_enter));
            let observation = match observation {
                Ok(observation) => Some(observation),
                Err(err) => {
                    tracing::debug!(?err, "cannot observe row, starting entrance");
                    entered.set(true);
                    None
                }
            };

            move || {
                if let Some((observer, _listener)) = observation {
                    observer.disconnect();
                }
            }
        });
    }

    *entered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_slides_with_stagger() {
        let motion = EntranceMotion::default();
        assert_eq!(
            motion.style_for(0, true),
            "animation: chat-row-slide-down 300ms ease-out 0.000s both; \
             animation-play-state: running;"
        );
        assert!(motion.style_for(3, true).contains("ease-out 0.300s both"));
    }

    #[test]
    fn test_delay_is_proportional_to_index() {
        let motion = EntranceMotion::default();
        assert!((motion.delay_secs(5) - 0.5).abs() < 1e-6);
        assert!((motion.delay_secs(10) - 2.0 * motion.delay_secs(5)).abs() < 1e-6);
    }

    #[test]
    fn test_slide_keyframes_start_hidden_and_offset() {
        let keyframes = EntranceMotion::default().keyframes();
        assert!(keyframes.contains("@keyframes chat-row-slide-down"));
        assert!(keyframes.contains("opacity: 0; transform: translateY(-100%)"));
        assert!(keyframes.contains("opacity: 1; transform: translateY(0)"));
    }

    #[test]
    fn test_animation_never_blocks_pointer_events() {
        for motion in [
            EntranceMotion::default(),
            EntranceMotion::Fade {
                stagger_secs: 0.2,
                duration_ms: 150,
            },
        ] {
            assert!(!motion.style_for(4, false).contains("pointer-events"));
            assert!(!motion.style_for(4, true).contains("pointer-events"));
            assert!(!motion.keyframes().contains("pointer-events"));
        }
    }

    #[test]
    fn test_fade_from_config() {
        let config = MotionConfig {
            kind: MotionKind::Fade,
            stagger_secs: 0.05,
            duration_ms: 200,
            offset_percent: 0.0,
        };
        let motion = EntranceMotion::from(&config);
        assert!(motion.style_for(2, true).starts_with("animation: chat-row-fade-in 200ms ease-out 0.100s both;"));
    }

    #[test]
    fn test_still_policy_emits_nothing() {
        let motion = EntranceMotion::Still;
        assert!(motion.style_for(7, false).is_empty());
        assert!(motion.style_for(7, true).is_empty());
        assert!(motion.keyframes().is_empty());
        assert!(motion.delay_secs(7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_entrance_waits_for_viewport() {
        let motion = EntranceMotion::default();
        let before = motion.style_for(40, false);
        assert!(before.contains("ease-out 4.000s both"));
        assert!(before.ends_with("animation-play-state: paused;"));
        assert!(
            motion
                .style_for(40, true)
                .ends_with("animation-play-state: running;")
        );
    }

    #[test]
    fn test_small_stagger_keeps_millisecond_precision() {
        let motion = EntranceMotion::Fade {
            stagger_secs: 0.004,
            duration_ms: 150,
        };
        assert!(motion.style_for(1, true).contains("ease-out 0.004s both"));
        assert!(motion.style_for(3, true).contains("ease-out 0.012s both"));
    }
}
