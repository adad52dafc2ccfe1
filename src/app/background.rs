use leptos::prelude::*;

use crate::background::{BackgroundLayout, Tone, BACKGROUND_SEED};

fn tone_classes(tone: Tone) -> (&'static str, &'static str) {
    match tone {
        Tone::Primary => ("border-primary/30 bg-primary/10", "bg-primary/20"),
        Tone::Secondary => ("border-accent/30 bg-accent/10", "bg-accent/20"),
    }
}

#[component]
pub fn DataBackground() -> impl IntoView {
    let layout = BackgroundLayout::generate(BACKGROUND_SEED);

    let grid = layout
        .grid_lines
        .into_iter()
        .map(|line| {
            view! {
                <div
                    class="absolute h-full w-px bg-primary"
                    style=format!("left: {}%; animation-delay: {:.2}s;", line.position, line.delay)
                ></div>
                <div
                    class="absolute w-full h-px bg-primary"
                    style=format!(
                        "top: {}%; animation-delay: {:.2}s;",
                        line.position,
                        line.delay + 2.0,
                    )
                ></div>
            }
        })
        .collect_view();

    let nodes = layout
        .nodes
        .into_iter()
        .map(|node| {
            let (outer, inner) = tone_classes(node.tone);
            view! {
                <div
                    class=format!("absolute rounded-full border-2 animate-pulse {outer}")
                    style=format!(
                        "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {:.2}s; animation-duration: 3s;",
                        node.left,
                        node.top,
                        node.size,
                        node.size,
                        node.delay,
                    )
                >
                    <div class=format!("absolute inset-1 rounded-full {inner}")></div>
                </div>
            }
        })
        .collect_view();

    let connections = layout
        .connections
        .into_iter()
        .map(|c| {
            view! {
                <svg
                    class="absolute inset-0 w-full h-full pointer-events-none"
                    style=format!("animation-delay: {:.2}s; animation-duration: {:.2}s;", c.delay, c.duration)
                >
                    <line
                        x1=format!("{:.2}%", c.start_x)
                        y1=format!("{:.2}%", c.start_y)
                        x2=format!("{:.2}%", c.end_x)
                        y2=format!("{:.2}%", c.end_y)
                        stroke="hsl(var(--primary))"
                        stroke-width="1"
                        stroke-opacity="0.15"
                        stroke-dasharray="5,5"
                        class="animate-pulse"
                    />
                </svg>
            }
        })
        .collect_view();

    let streams = layout
        .streams
        .into_iter()
        .map(|s| {
            view! {
                <div
                    class="absolute top-0 w-px bg-gradient-to-b from-transparent via-primary/20 to-transparent animate-pulse"
                    style=format!(
                        "left: {:.2}%; height: {:.2}%; animation-delay: {:.2}s; animation-duration: 4s;",
                        s.left,
                        s.height,
                        s.delay,
                    )
                ></div>
            }
        })
        .collect_view();

    let bars = layout
        .chart_bars
        .into_iter()
        .map(|b| {
            view! {
                <div
                    class="absolute bottom-0 w-2 bg-gradient-to-t from-primary/40 to-primary/10 rounded-t animate-pulse"
                    style=format!(
                        "left: {:.0}%; height: {:.1}px; animation-delay: {:.2}s; animation-duration: 2s;",
                        b.left,
                        b.height,
                        b.delay,
                    )
                ></div>
            }
        })
        .collect_view();

    let indicators = layout
        .indicators
        .into_iter()
        .map(|ind| {
            view! {
                <div
                    class="absolute text-primary/15 font-mono animate-float"
                    style=format!(
                        "left: {:.2}%; top: {:.2}%; font-size: {:.1}px; animation-delay: {:.2}s; animation-duration: 8s;",
                        ind.left,
                        ind.top,
                        ind.font_size,
                        ind.delay,
                    )
                >
                    {ind.symbol}
                </div>
            }
        })
        .collect_view();

    let metrics = layout
        .metrics
        .iter()
        .enumerate()
        .map(|(i, m)| {
            view! {
                <div
                    class="absolute text-xs text-primary/20 font-mono animate-pulse"
                    style=format!(
                        "left: {}%; top: {}%; animation-delay: {:.1}s; animation-duration: 3s;",
                        m.x,
                        m.y,
                        i as f64 * 1.5,
                    )
                >
                    <div class="border border-primary/10 bg-background/5 px-2 py-1 rounded backdrop-blur-sm">
                        <div class="text-primary/30 text-[10px]">{m.label}</div>
                        <div class="text-primary/40 font-semibold">{m.value}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let particles = layout
        .particles
        .into_iter()
        .map(|p| {
            view! {
                <div
                    class="absolute w-1 h-1 bg-primary/20 rounded-full animate-float"
                    style=format!(
                        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        p.left,
                        p.top,
                        p.delay,
                        p.duration,
                    )
                ></div>
            }
        })
        .collect_view();

    view! {
        <div class="data-background absolute inset-0 -z-20 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 opacity-[0.03]">{grid}</div>
            {nodes}
            {connections}
            {streams}
            <div class="absolute bottom-10 left-10 w-40 h-24 opacity-20">{bars}</div>
            {indicators}
            {metrics}
            <div class="absolute inset-0">{particles}</div>
        </div>
    }
}
