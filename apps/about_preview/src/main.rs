use std::path::PathBuf;

use about_core::{
    AboutPresenter, AboutSection, CarouselFrame, CarouselMode, CdnImageUrlResolver,
    ContentSource, FileContentSource, IconRegistry,
};
use anyhow::{Context, Result};
use clap::Parser;
use tokio_stream::{wrappers::WatchStream, StreamExt};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
struct Args {
    /// JSON snapshot of the homepage document.
    #[arg(long)]
    content: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames to print after the first one; defaults to one full cycle.
    #[arg(long)]
    frames: Option<usize>,
    /// Indicator to activate before cycling starts.
    #[arg(long)]
    select: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let settings = load_settings(args.config.as_deref());

    let resolver = CdnImageUrlResolver::new(
        &settings.cdn_base_url,
        &settings.cdn_project_id,
        &settings.cdn_dataset,
    )
    .context("invalid image CDN settings")?;
    let icons = IconRegistry::standard();

    let record = FileContentSource::new(&args.content)
        .fetch()
        .await
        .with_context(|| format!("failed to load content from {}", args.content.display()))?;

    let presenter = AboutPresenter::mount(record.as_ref(), &icons, settings.rotation_interval());
    let Some(section) = presenter.section() else {
        println!("no about content; nothing to render");
        return Ok(());
    };
    println!("{}", render_copy(section));

    if let Some(index) = args.select {
        if !presenter.select(index) {
            warn!("ignoring --select {index}: only {} image(s)", section.image_count());
        }
    }

    let size = settings.render_size();
    let Some(frame) = presenter.current_frame(&resolver, size) else {
        println!("(no images)");
        return Ok(());
    };
    println!("{}", render_frame(&frame));

    if presenter.mode() == CarouselMode::Idle {
        presenter.teardown();
        return Ok(());
    }

    let remaining = args.frames.unwrap_or(section.image_count());
    let mut changes = WatchStream::from_changes(presenter.subscribe()).take(remaining);
    loop {
        tokio::select! {
            change = changes.next() => {
                let Some(state) = change else { break };
                if let Some(frame) = section.frame(state.current_index(), &resolver, size) {
                    println!("{}", render_frame(&frame));
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("preview: interrupted");
                break;
            }
        }
    }

    presenter.teardown();
    Ok(())
}

fn render_copy(section: &AboutSection) -> String {
    let mut out = format!("# {}", section.heading);
    if let Some(subtitle) = &section.subtitle {
        out.push_str(&format!("\n{subtitle}"));
    }
    if let Some(description) = &section.description {
        out.push_str(&format!("\n\n{description}"));
    }
    for card in &section.highlights {
        out.push_str(&format!(
            "\n  [{}] {}: {}",
            card.icon.glyph_name(),
            card.title,
            card.description
        ));
    }
    out
}

fn render_frame(frame: &CarouselFrame) -> String {
    let dots: String = frame
        .indicators
        .iter()
        .map(|indicator| if indicator.active { '●' } else { '○' })
        .collect();
    let src = frame.src.as_deref().unwrap_or("<unresolved>");
    if dots.is_empty() {
        format!("{} | {src}", frame.alt)
    } else {
        format!("{dots} {} | {src}", frame.alt)
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
