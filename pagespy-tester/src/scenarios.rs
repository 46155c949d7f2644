//! Scenario catalog
//!
//! Every scenario builds a seeded [`SyntheticPage`] from the page config,
//! drives a [`ScrollSync`] over it and checks the invariants the browser
//! build relies on. A scenario fails with the first broken invariant.

use anyhow::{Result, ensure};
use pagespy_core::{GeometrySource, HeaderMode, PageConfig, ScrollSync, SyntheticPage, TickFrame};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Scroll distance between consecutive sweep ticks.
const SWEEP_STEP: f64 = 37.0;
const JITTER_TICKS: usize = 200;
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub config: &'a PageConfig,
    pub seed: u64,
    pub iteration: usize,
}

impl ScenarioCtx<'_> {
    /// Generator unique to this seed and iteration.
    pub fn rng(&self) -> ChaCha8Rng {
        let stream = u64::try_from(self.iteration).unwrap_or(u64::MAX);
        ChaCha8Rng::seed_from_u64(self.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ stream)
    }
}

pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    run: fn(&ScenarioCtx<'_>) -> Result<()>,
}

impl Scenario {
    pub fn run(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        (self.run)(ctx)
    }
}

const CATALOG: &[Scenario] = &[
    Scenario {
        name: "sweep",
        description: "Top-to-bottom scroll keeps one active entry and monotonic progress",
        run: sweep,
    },
    Scenario {
        name: "single-section",
        description: "A one-section page always reports 0% progress",
        run: single_section,
    },
    Scenario {
        name: "header-lock",
        description: "After a manual toggle the header never auto-switches",
        run: header_lock,
    },
    Scenario {
        name: "indicator-bounds",
        description: "Indicator marker stays inside its track",
        run: indicator_bounds,
    },
    Scenario {
        name: "jitter",
        description: "Random scroll jumps keep every derived value in range",
        run: jitter,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.name, s.description))
}

pub fn get_scenario(name: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|s| s.name == name)
}

pub fn all_scenario_names() -> Vec<String> {
    CATALOG.iter().map(|s| s.name.to_string()).collect()
}

/// Page with every configured section, each at least one viewport tall, and a
/// footer shorter than half the viewport.
fn random_page(config: &PageConfig, rng: &mut ChaCha8Rng) -> SyntheticPage {
    let viewport = rng.gen_range(600.0..1200.0);
    let mut page = SyntheticPage::new(viewport)
        .with_header(rng.gen_range(0.0..400.0))
        .with_footer(rng.gen_range(0.0..viewport / 2.0));
    for key in &config.sections {
        page = page.section(key, rng.gen_range(viewport..viewport * 3.0));
    }
    page
}

fn sweep_offsets(max_scroll: f64) -> Vec<f64> {
    let mut offsets = Vec::new();
    let mut offset = 0.0;
    while offset < max_scroll {
        offsets.push(offset);
        offset += SWEEP_STEP;
    }
    offsets.push(max_scroll);
    offsets
}

fn check_spy(frame: &TickFrame, offset: f64) -> Result<()> {
    if let Some(spy) = &frame.spy {
        ensure!(
            spy.active_count() == 1,
            "{} rail entries active at offset {offset}",
            spy.active_count()
        );
        ensure!(
            spy.progress_percent.is_finite() && (0.0..=100.0).contains(&spy.progress_percent),
            "progress {} out of range at offset {offset}",
            spy.progress_percent
        );
    }
    Ok(())
}

/// With auto-switching on, the mode after a tick mirrors the trigger
/// section's side of the activation line.
fn check_header_follows_trigger(
    sync: &ScrollSync,
    page: &SyntheticPage,
    config: &PageConfig,
) -> Result<()> {
    let Some(rect) = page.section_rect(&config.trigger_section) else {
        return Ok(());
    };
    let line = sync.header().trigger_point(page.viewport_height());
    let expected = if rect.top < line {
        HeaderMode::Processed
    } else {
        HeaderMode::Raw
    };
    ensure!(
        sync.header().mode() == expected,
        "header is {:?} with trigger top {} against line {line}",
        sync.header().mode(),
        rect.top
    );
    Ok(())
}

fn sweep(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut rng = ctx.rng();
    let mut page = random_page(ctx.config, &mut rng);
    let registry = page.registry(&ctx.config.sections);
    let count = registry.len();
    let mut sync = ScrollSync::new(ctx.config, registry, true);

    let mut last_active: Option<usize> = None;
    let mut last_progress = 0.0;
    for offset in sweep_offsets(page.max_scroll()) {
        page.scroll_to(offset);
        let frame = sync.tick(&page, None);
        check_spy(&frame, offset)?;
        if let Some(spy) = &frame.spy {
            if let Some(prev) = last_active {
                ensure!(
                    spy.active >= prev,
                    "active entry moved back from {prev} to {} at offset {offset}",
                    spy.active
                );
            }
            ensure!(
                spy.progress_percent >= last_progress,
                "progress fell from {last_progress} to {} at offset {offset}",
                spy.progress_percent
            );
            last_active = Some(spy.active);
            last_progress = spy.progress_percent;
        }
        check_header_follows_trigger(&sync, &page, ctx.config)?;
    }

    if count > 1 {
        ensure!(
            (last_progress - 100.0).abs() < EPSILON,
            "progress ended at {last_progress}% instead of 100%"
        );
    }
    Ok(())
}

fn single_section(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut rng = ctx.rng();
    let key = ctx
        .config
        .sections
        .first()
        .map_or("overview", String::as_str);
    let viewport = rng.gen_range(600.0..1200.0);
    let mut page = SyntheticPage::new(viewport).section(key, rng.gen_range(100.0..2400.0));
    let registry = page.registry(&[key]);
    let mut sync = ScrollSync::new(ctx.config, registry, true);

    for offset in sweep_offsets(page.max_scroll()) {
        page.scroll_to(offset);
        let frame = sync.tick(&page, Some(ctx.config.marker_size + 100.0));
        check_spy(&frame, offset)?;
        if let Some(spy) = &frame.spy {
            ensure!(
                spy.progress_percent == 0.0,
                "single section reported {}% at offset {offset}",
                spy.progress_percent
            );
        }
        if let Some(indicator) = &frame.indicator {
            ensure!(
                indicator.fraction.is_finite() && indicator.offset.is_finite(),
                "indicator not finite at offset {offset}"
            );
        }
    }
    Ok(())
}

fn header_lock(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut rng = ctx.rng();
    let mut page = random_page(ctx.config, &mut rng);
    let registry = page.registry(&ctx.config.sections);
    let mut sync = ScrollSync::new(ctx.config, registry, true);

    let _ = sync.tick(&page, None);
    let toggles = rng.gen_range(1..=3);
    for _ in 0..toggles {
        let _ = sync.toggle_header();
    }
    let locked = sync.header().mode();
    ensure!(
        !sync.header().auto_switch_enabled(),
        "auto-switch still enabled after {toggles} manual toggles"
    );

    for offset in sweep_offsets(page.max_scroll()) {
        page.scroll_to(offset);
        let frame = sync.tick(&page, None);
        ensure!(
            frame.header.is_none(),
            "header changed on scroll at offset {offset}"
        );
        ensure!(
            sync.header().mode() == locked,
            "header left {locked:?} at offset {offset}"
        );
    }
    Ok(())
}

fn indicator_bounds(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut rng = ctx.rng();
    let mut page = random_page(ctx.config, &mut rng);
    let marker = ctx.config.marker_size;
    let track = rng.gen_range(marker + 50.0..marker + 600.0);
    let limit = track - marker;
    let mut sync = ScrollSync::new(ctx.config, page.registry(&ctx.config.sections), false);

    let offsets = sweep_offsets(page.max_scroll());
    let last = offsets.len() - 1;
    for (step, offset) in offsets.into_iter().enumerate() {
        page.scroll_to(offset);
        let frame = sync.tick(&page, Some(track));
        ensure!(frame.spy.is_none(), "scroll-spy ran without a rail");
        let Some(indicator) = frame.indicator else {
            anyhow::bail!("no indicator frame at offset {offset}");
        };
        ensure!(
            (0.0..=limit + EPSILON).contains(&indicator.offset),
            "marker at {} outside [0, {limit}] at offset {offset}",
            indicator.offset
        );
        if step == 0 {
            ensure!(indicator.offset == 0.0, "marker not at top before scrolling");
        }
        if step == last && page.max_scroll() > 0.0 {
            ensure!(
                (indicator.offset - limit).abs() < EPSILON,
                "marker at {} instead of {limit} at the bottom",
                indicator.offset
            );
        }
    }
    Ok(())
}

fn jitter(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut rng = ctx.rng();
    let mut page = random_page(ctx.config, &mut rng);
    let registry = page.registry(&ctx.config.sections);
    let mut sync = ScrollSync::new(ctx.config, registry, true);
    let track = ctx.config.marker_size + 200.0;
    let max = page.max_scroll();

    for _ in 0..JITTER_TICKS {
        let offset = rng.gen_range(0.0..=max);
        page.scroll_to(offset);
        let frame = sync.tick(&page, Some(track));
        check_spy(&frame, offset)?;
        if let Some(indicator) = &frame.indicator {
            ensure!(
                (0.0..=1.0).contains(&indicator.fraction),
                "scroll fraction {} at offset {offset}",
                indicator.fraction
            );
        }
        check_header_follows_trigger(&sync, &page, ctx.config)?;
    }
    Ok(())
}
