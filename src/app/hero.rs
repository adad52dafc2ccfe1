use std::fmt::Write;

use leptos::prelude::*;

use crate::background::{bar_keyframes, HeroScene, BACKGROUND_SEED, BAR_PERIOD, HERO_PARTICLES};

const RESUME_FILE: &str = "Alekya_Dakarapu_Resume.pdf";
const SKILLS: [&str; 5] = ["Python", "SQL", "Tableau", "Machine Learning", "Azure"];
const BAR_KEYFRAME_STEPS: usize = 24;

/// Orthographic projection of the scene into a 0-100 viewBox.
fn project(x: f64, y: f64) -> (f64, f64) {
    (
        (x / HeroScene::WIDTH + 0.5) * 100.0,
        (0.5 - y / HeroScene::HEIGHT) * 100.0,
    )
}

/// One `@keyframes hero-bar-{i}` rule per bar, sampled from `bar_scale`.
fn hero_bar_css(count: usize) -> String {
    let mut css = String::new();
    for i in 0..count {
        let _ = write!(css, "@keyframes hero-bar-{i}{{");
        for (pct, scale) in bar_keyframes(i, BAR_KEYFRAME_STEPS) {
            let _ = write!(css, "{pct:.2}%{{transform:scaleY({scale:.3})}}");
        }
        css.push('}');
    }
    css
}

#[component]
fn HeroScenery() -> impl IntoView {
    let scene = HeroScene::generate(BACKGROUND_SEED, HERO_PARTICLES);
    let points = scene
        .particles
        .iter()
        .map(|[x, y, z]| {
            let (cx, cy) = project(*x, *y);
            // nearer points are drawn larger
            let r = 0.12 + (z + HeroScene::DEPTH / 2.0) * 0.03;
            view! { <circle cx=format!("{cx:.2}") cy=format!("{cy:.2}") r=format!("{r:.3}") /> }
        })
        .collect_view();
    let bar_css = hero_bar_css(scene.bars.len());
    let bars = scene
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let (left, _) = project(bar.x, 0.0);
            view! {
                <div
                    class="absolute bottom-0 w-[2%] h-[30%] origin-bottom bg-sky-300/40 rounded-t"
                    style=format!(
                        "left: {left:.2}%; animation: hero-bar-{i} {BAR_PERIOD:.3}s linear infinite;",
                    )
                ></div>
            }
        })
        .collect_view();

    view! {
        <div class="absolute inset-0 -z-10 pointer-events-none" aria-hidden="true">
            <style>{bar_css}</style>
            <svg
                class="absolute inset-0 w-full h-full fill-blue-300/60 hero-particles"
                viewBox="0 0 100 100"
                preserveAspectRatio="none"
            >
                {points}
            </svg>
            <div class="absolute inset-x-0 bottom-0 h-1/3">{bars}</div>
            <div class="absolute left-1/2 top-1/3 w-96 h-96 -translate-x-1/2 -translate-y-1/2 rounded-full border border-violet-400/60 hero-ring"></div>
        </div>
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            id="home"
            class="relative flex items-center justify-center min-h-[90vh] overflow-hidden"
        >
            <HeroScenery />
            <div class="max-w-6xl mx-auto text-center px-4 animate-fade-in-up">
                <p class="mb-8 text-muted text-lg tracking-wider uppercase">
                    "Beyond Data — Within Insights"
                </p>
                <h1 class="text-6xl md:text-8xl lg:text-9xl font-bold mb-8 leading-[0.9] tracking-tight">
                    <span class="block text-foreground">"Alekya"</span>
                    <span class="block text-primary">"Dakarapu"</span>
                </h1>
                <p class="mb-12 text-xl md:text-2xl lg:text-3xl text-muted font-light leading-relaxed max-w-4xl mx-auto">
                    "A data analyst who transforms complex datasets into "
                    <span class="text-accent font-medium">"strategic insights"</span>
                    ", powering data-driven decisions through advanced analytics and visualization."
                </p>
                <div class="flex flex-wrap justify-center gap-3 mb-16">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="px-6 py-3 bg-card border border-border rounded-full text-sm font-medium hover:bg-primary transition-all duration-300">
                                    {*skill}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col sm:flex-row gap-6 justify-center items-center mb-16">
                    <a
                        href=format!("/{RESUME_FILE}")
                        download=RESUME_FILE
                        target="_blank"
                        class="px-12 py-6 text-lg font-medium bg-primary rounded-full transition-all duration-300 hover:scale-105"
                    >
                        "⬇ Download Resume"
                    </a>
                    <a
                        href="#contact"
                        class="px-12 py-6 text-lg font-medium border border-border rounded-full transition-all duration-300 hover:scale-105"
                    >
                        "✉ Let's Connect"
                    </a>
                </div>
                <div class="flex justify-center space-x-12">
                    <a
                        href="https://linkedin.com/in/alekyadakarapu"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-muted hover:text-primary text-2xl"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href="https://github.com/alekyadakarapu"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-muted hover:text-primary text-2xl"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href="mailto:dakarapualekya@gmail.com"
                        class="text-muted hover:text-primary text-2xl"
                        aria-label="Email"
                    >
                        "✉"
                    </a>
                </div>
            </div>
        </section>
    }
}
