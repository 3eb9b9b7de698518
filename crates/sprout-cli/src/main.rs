//! Screening submission client.
//!
//! Collects the five screening answers as typed flags (invalid or missing
//! answers never reach the network), optionally attaches a simulated
//! emotion capture, submits one `/analyze` request, and renders whatever
//! comes back. No retry, no timeout.

use clap::Parser;
use serde_json::Value;

use sprout_core::models::screening::{
    EyeContact, ScreeningInput, SensoryReaction, SocialResponse, SpeechLevel,
};
use sprout_emotion::EmotionSource;
use sprout_emotion::simulated::SimulatedDetector;

#[derive(Parser)]
#[command(name = "sprout")]
#[command(about = "Submit a developmental screening form for analysis")]
struct Cli {
    /// Analysis service base URL.
    #[arg(long, default_value = "http://localhost:4001")]
    server: String,

    /// Child's age in years.
    #[arg(long)]
    age: u32,

    #[arg(long)]
    eye_contact: EyeContact,

    #[arg(long)]
    speech_level: SpeechLevel,

    #[arg(long)]
    social_response: SocialResponse,

    #[arg(long)]
    sensory_reactions: SensoryReaction,

    /// Attach a simulated emotion capture to the submission.
    #[arg(long)]
    with_emotion: bool,

    /// Seed for the simulated capture; random when omitted.
    #[arg(long, requires = "with_emotion")]
    emotion_seed: Option<u64>,

    /// Print the raw response body instead of formatted sections.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let mut input = ScreeningInput::from_answers(
        cli.age,
        cli.eye_contact,
        cli.speech_level,
        cli.social_response,
        cli.sensory_reactions,
    );

    if cli.with_emotion {
        let mut detector = match cli.emotion_seed {
            Some(seed) => SimulatedDetector::with_seed(seed),
            None => SimulatedDetector::new(),
        };
        let sample = detector.capture()?;
        println!(
            "Captured emotion sample: {} ({:.1}% confidence, {})",
            sample.dominant_emotion, sample.confidence, sample.method
        );
        input.emotion_data = Some(sample);
    }

    let url = format!("{}/analyze", cli.server.trim_end_matches('/'));
    let response = reqwest::Client::new().post(&url).json(&input).send().await?;
    let status = response.status();
    let body: Value = response.json().await?;

    report(cli.json, status, &body)
}

/// Render the response body and map the HTTP status onto the exit code.
/// `--json` changes what gets printed, never whether a failure fails.
fn report(json: bool, status: reqwest::StatusCode, body: &Value) -> eyre::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(body)?);
    } else if status.is_success() {
        render_plan(body);
    } else {
        render_error(body);
    }

    if !status.is_success() {
        eyre::bail!("analysis request failed with status {status}");
    }
    Ok(())
}

fn render_error(body: &Value) {
    if let Some(message) = body["message"].as_str() {
        eprintln!("{message}");
    } else if let Some(error) = body["error"].as_str() {
        eprintln!("{error}");
    }
    if let Some(missing) = body["missing_fields"].as_array() {
        for field in missing {
            if let Some(field) = field.as_str() {
                eprintln!("  missing: {field}");
            }
        }
    }
}

fn render_plan(body: &Value) {
    render_section("Focus areas", &body["focus_areas"]);
    render_section("Therapy goals", &body["therapy_goals"]);
    render_section("Activities", &body["activities"]);
    render_section("Therapy recommendations", &body["therapy_recommendations"]);

    // Either notes key, depending on what produced the plan.
    let notes = body["clinical_notes"]
        .as_str()
        .or_else(|| body["notes"].as_str());
    if let Some(notes) = notes {
        println!("Notes:\n  {notes}\n");
    }
}

fn render_section(title: &str, items: &Value) {
    let Some(items) = items.as_array() else {
        return;
    };
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        if let Some(item) = item.as_str() {
            println!("  - {item}");
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::report;

    #[test]
    fn error_status_fails_even_in_json_mode() {
        let body = json!({ "error": "Missing required fields" });
        let err = report(true, StatusCode::BAD_REQUEST, &body).unwrap_err();
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn error_status_fails_in_rendered_mode() {
        let body = json!({ "error": "Missing required fields" });
        assert!(report(false, StatusCode::BAD_REQUEST, &body).is_err());
    }

    #[test]
    fn success_status_is_ok_in_both_modes() {
        let body = json!({ "focus_areas": ["General Development Support"] });
        assert!(report(true, StatusCode::OK, &body).is_ok());
        assert!(report(false, StatusCode::OK, &body).is_ok());
    }
}
