//! Scripted sessions exercising the engine the way a host app would.

use std::time::Duration;

use carousel::prelude::*;
use carousel::{CarouselEvent, EdgeInsets, LoopRendering, RenderedItem};

/// What a scenario observed.
#[derive(Debug, Default)]
pub struct Report {
    pub final_index: i64,
    pub frames: usize,
    pub selection_changes: Vec<(i64, i64)>,
}

pub struct Scenario {
    pub name: &'static str,
    pub run: fn(HostLauncher) -> anyhow::Result<Report>,
}

pub const ALL: &[Scenario] = &[
    Scenario {
        name: "swipe",
        run: swipe,
    },
    Scenario {
        name: "infinite loop",
        run: infinite_loop,
    },
    Scenario {
        name: "auto-play",
        run: auto_play,
    },
    Scenario {
        name: "large ring",
        run: large_ring,
    },
];

fn photos() -> Vec<String> {
    (1..=5).map(|i| format!("photo-{i}")).collect()
}

fn render(index: usize, item: &String) -> String {
    format!("[{index}] {item}")
}

fn measure(_: &String) -> Size {
    Size::new(300.0, 180.0)
}

fn describe(now: Duration, frame: &[RenderedItem<String>]) {
    let summary: Vec<String> = frame
        .iter()
        .map(|item| {
            format!(
                "{}@{:.0}x{:.2}{}",
                item.node,
                item.placement.x,
                item.placement.scale,
                if item.placement.is_selected { "*" } else { "" }
            )
        })
        .collect();
    log::trace!("{:>6}ms {}", now.as_millis(), summary.join(" "));
}

fn run_script<T, R>(
    launcher: HostLauncher,
    carousel: &mut Carousel<T, R>,
    script: Vec<ScriptStep>,
) -> Report
where
    R: ItemRenderer<T, Node = String>,
{
    let selections = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&selections);
    carousel
        .engine_mut()
        .set_selection_listener(move |previous, current| {
            sink.borrow_mut().push((previous, current))
        });

    let mut frames = 0;
    launcher.run(carousel, &measure, script, |now, frame| {
        frames += 1;
        describe(now, frame);
    });

    for event in carousel.engine_mut().take_events() {
        match event {
            CarouselEvent::WindowShifted { shift } => log::info!("loop window rebiased by {shift}"),
            CarouselEvent::AutoPlayStateChanged(phase) => log::info!("auto-play {phase:?}"),
            _ => {}
        }
    }
    carousel.engine_mut().clear_selection_listener();

    let selection_changes = selections.borrow().clone();
    Report {
        final_index: carousel.engine().selected_index(),
        frames,
        selection_changes,
    }
}

fn settle() -> ScriptStep {
    ScriptStep::Wait(Duration::from_millis(400))
}

fn swipe(launcher: HostLauncher) -> anyhow::Result<Report> {
    let config = CarouselConfig::default()
        .scale_animation(ScaleAnimation::default())
        .indicator(Indicator::default().with_background(IndicatorBackground::Capsule {
            color: carousel::Color::BLACK.with_alpha(0.2),
            padding: EdgeInsets::INDICATOR,
        }));
    let mut carousel = Carousel::new(photos(), config, render)?;
    let script = vec![
        ScriptStep::Drag {
            translation_x: -140.0,
            frames: 6,
        },
        settle(),
        ScriptStep::Drag {
            translation_x: -40.0,
            frames: 3,
        },
        settle(),
        ScriptStep::Drag {
            translation_x: 160.0,
            frames: 6,
        },
        settle(),
        ScriptStep::Drag {
            translation_x: 200.0,
            frames: 6,
        },
        settle(),
        ScriptStep::Select(9),
        settle(),
    ];
    Ok(run_script(launcher, &mut carousel, script))
}

fn infinite_loop(launcher: HostLauncher) -> anyhow::Result<Report> {
    let config = CarouselConfig::new(ItemLayout::fixed(300.0))
        .infinite_loop()
        .with_loop_rendering(LoopRendering::Windowed)
        .with_initial_index(2);
    let mut carousel = Carousel::new(photos(), config, render)?;
    let mut script = Vec::new();
    for _ in 0..4 {
        script.push(ScriptStep::Next);
        script.push(settle());
    }
    script.push(ScriptStep::Drag {
        translation_x: 150.0,
        frames: 5,
    });
    script.push(settle());
    Ok(run_script(launcher, &mut carousel, script))
}

fn auto_play(launcher: HostLauncher) -> anyhow::Result<Report> {
    let config = CarouselConfig::new(ItemLayout::fixed(300.0).with_ratio(16.0 / 9.0))
        .auto_play(AutoPlay::new(Duration::from_secs(2), AutoPlayDirection::Forward));
    let mut carousel = Carousel::new(photos(), config, render)?;
    let script = vec![
        ScriptStep::Wait(Duration::from_millis(4500)),
        ScriptStep::Interact,
        ScriptStep::Wait(Duration::from_millis(3000)),
        ScriptStep::PauseAutoPlay,
        ScriptStep::Wait(Duration::from_millis(5000)),
        ScriptStep::ResumeAutoPlay,
        ScriptStep::Wait(Duration::from_millis(10_000)),
    ];
    Ok(run_script(launcher, &mut carousel, script))
}

fn large_ring(launcher: HostLauncher) -> anyhow::Result<Report> {
    let items: Vec<String> = (0..200).map(|i| format!("card-{i}")).collect();
    let config =
        CarouselConfig::new(ItemLayout::fill_container().with_spacing(0.0)).infinite_loop();
    let mut carousel = Carousel::new(items, config, render)?;
    let script = vec![
        ScriptStep::Previous,
        settle(),
        ScriptStep::Select(150),
        settle(),
        ScriptStep::Resize(Size::new(800.0, 480.0)),
        ScriptStep::Drag {
            translation_x: -500.0,
            frames: 8,
        },
        settle(),
    ];
    Ok(run_script(launcher, &mut carousel, script))
}
