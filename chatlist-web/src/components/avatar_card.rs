use shared::config::AvatarConfig;
use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarCardProps {
    #[prop_or_default]
    pub avatars: Vec<AttrValue>,
    #[prop_or_default]
    pub config: AvatarConfig,
}

/// Avatars shown individually and the size of the `+N` overflow, if any.
pub(crate) fn split_overflow(total: usize, max_visible: usize) -> (usize, usize) {
    let max_visible = max_visible.max(1);
    if total <= max_visible {
        (total, 0)
    } else {
        // One slot goes to the overflow bubble.
        let shown = max_visible - 1;
        (shown, total - shown)
    }
}

#[allow(clippy::cast_precision_loss)]
fn slot_offset(config: &AvatarConfig, slot: usize) -> f32 {
    config.overlap_rem * slot as f32
}

fn slot_style(config: &AvatarConfig, slot: usize) -> String {
    format!(
        "position: absolute; top: 0; left: {}rem; width: {size}rem; height: {size}rem; \
         border-radius: 50%; border: 2px solid #fff; object-fit: cover;",
        slot_offset(config, slot),
        size = config.size_rem,
    )
}

/// Stacked, overlapping avatar cluster.
#[function_component(AvatarCard)]
pub fn avatar_card(props: &AvatarCardProps) -> Html {
    let config = props.config;
    let (shown, overflow) = split_overflow(props.avatars.len(), config.max_visible);
    let slots = shown + usize::from(overflow > 0);
    let width = if slots == 0 {
        config.size_rem
    } else {
        slot_offset(&config, slots - 1) + config.size_rem
    };
    let frame_style = format!(
        "position: relative; flex-shrink: 0; width: {width}rem; height: {}rem;",
        config.size_rem
    );

    html! {
        <div class="avatar-card" style={frame_style}>
            { for props.avatars.iter().take(shown).enumerate().map(|(slot, src)| html! {
                <img
                    class="avatar-card-image"
                    src={src.clone()}
                    alt=""
                    style={slot_style(&config, slot)}
                />
            })}
            {
                if overflow > 0 {
                    html! {
                        <span
                            class="avatar-card-overflow flex items-center justify-center text-xs"
                            style={slot_style(&config, shown)}
                        >
                            { format!("+{overflow}") }
                        </span>
                    }
                } else {
                    Html::default()
                }
            }
        </div>
    }
}
