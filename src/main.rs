use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weatherverse::app::App;
use weatherverse::config::Config;
use weatherverse::models::{Action, Outcome};

#[derive(Debug, Parser)]
#[command(name = "weatherverse")]
#[command(about = "Explore the weather, stories, and visuals of any place")]
struct CliArgs {
    /// The place to look up.
    #[arg(value_name = "ADDRESS")]
    address: String,

    /// What to do with the place.
    #[arg(long, value_enum, default_value_t = Action::CurrentSkies)]
    action: Action,

    /// Where to write the generated image (ai-vision only).
    #[arg(long, value_name = "PATH", default_value = "vision.png")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weatherverse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    // Missing keys are fatal here, before any dispatch.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::new(&config);

    match app.dispatch(&args.address, args.action).await {
        Ok(outcome) => {
            render(outcome, &args.output)?;
            Ok(())
        }
        Err(failure) => {
            eprintln!("{}", failure);
            std::process::exit(1);
        }
    }
}

fn render(outcome: Outcome, output: &std::path::Path) -> Result<()> {
    match outcome {
        Outcome::Weather(report) => {
            println!("Weather in {}", report.name);
            println!("Temperature: {}°F", report.temp_f);
            println!("Weather Condition: {}", report.condition);
        }
        Outcome::Text { heading, body } => {
            println!("{}", heading);
            println!();
            println!("{}", body);
        }
        Outcome::Vision { image, caption } => {
            image.save_with_format(output, image::ImageFormat::Png)?;
            info!("Saved generated image to {}", output.display());
            println!("{}", caption);
            println!("Image written to {}", output.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render, CliArgs};
    use clap::Parser;
    use weatherverse::models::{Action, Outcome, WeatherReport};

    #[test]
    fn test_cli_defaults_to_current_skies() {
        let args = CliArgs::parse_from(["weatherverse", "New York"]);
        assert_eq!(args.address, "New York");
        assert_eq!(args.action, Action::CurrentSkies);
    }

    #[test]
    fn test_cli_parses_action_names() {
        let args = CliArgs::parse_from(["weatherverse", "Kyoto", "--action", "ai-vision"]);
        assert_eq!(args.action, Action::AiVision);

        let args = CliArgs::parse_from(["weatherverse", "Kyoto", "--action", "place-tales"]);
        assert_eq!(args.action, Action::PlaceTales);
    }

    #[test]
    fn test_render_weather_panel_does_not_fail() {
        let outcome = Outcome::Weather(WeatherReport {
            name: "New York".to_string(),
            temp_f: 55.4,
            condition: "clear sky".to_string(),
        });
        render(outcome, std::path::Path::new("unused.png")).unwrap();
    }

    #[test]
    fn test_render_vision_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vision.png");

        let image = image::DynamicImage::new_rgba8(2, 2);
        let outcome = Outcome::Vision {
            image,
            caption: "AI Representation of Kyoto in next 100 years.".to_string(),
        };

        render(outcome, &path).unwrap();
        assert!(path.exists());
        assert!(image::open(&path).is_ok());
    }
}
