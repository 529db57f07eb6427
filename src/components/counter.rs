use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::reveal::use_in_view;

const DURATION_MS: u32 = 2_000;
const FRAME_MS: u32 = 16;

/// Value shown `elapsed_ms` into a count-up to `target`.
pub fn count_up(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    (u64::from(target) * u64::from(elapsed_ms) / u64::from(duration_ms)) as u32
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), 0.5, "0px");
    let elapsed = use_state(|| 0u32);
    let done = *elapsed >= DURATION_MS;

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |(visible, done): &(bool, bool)| {
                let interval = (*visible && !*done).then(|| {
                    let mut ticks = 0u32;
                    Interval::new(FRAME_MS, move || {
                        ticks = ticks.saturating_add(1);
                        let now = ticks.saturating_mul(FRAME_MS).min(DURATION_MS);
                        elapsed.set(now);
                    })
                });
                move || drop(interval)
            },
            (visible, done),
        );
    }

    let value = if done {
        props.target
    } else {
        count_up(props.target, *elapsed, DURATION_MS)
    };

    html! {
        <div ref={node} class="stat">
            <span class="stat-number">{value}{props.suffix.clone()}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_linearly_and_lands_on_target() {
        assert_eq!(count_up(500, 0, 2_000), 0);
        assert_eq!(count_up(500, 1_000, 2_000), 250);
        assert_eq!(count_up(500, 1_999, 2_000), 499);
        assert_eq!(count_up(500, 2_000, 2_000), 500);
        assert_eq!(count_up(500, 9_999, 2_000), 500);
        assert_eq!(count_up(7, 10, 0), 7);
    }
}
