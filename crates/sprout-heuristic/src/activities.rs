//! Activity selection: per-category age-banded lists plus universal fillers.

use crate::Observations;
use crate::bands::AgeBand;

/// Hard cap on the activity list.
pub const MAX_ACTIVITIES: usize = 8;

struct ActivityCategory {
    applies: fn(&Observations) -> bool,
    /// Band-keyed activity lists; a single-list category repeats the slice.
    lists: fn(AgeBand) -> &'static [&'static str],
}

const CATEGORIES: [ActivityCategory; 5] = [
    // Social communication and eye contact.
    ActivityCategory {
        applies: |obs| obs.eye_contact_concern,
        lists: |band| match band {
            AgeBand::Toddler => &[
                "Turn-taking games with preferred toys during 10-15 minute sessions",
                "Peek-a-boo and simple social games to encourage eye contact",
                "Simple cause-and-effect toys with guided interaction",
            ],
            AgeBand::Preschool => &[
                "Structured peer play sessions with visual supports and prompting",
                "Social stories about eye contact and appropriate greetings",
                "Role-playing activities for common social situations",
            ],
            AgeBand::SchoolAge => &[
                "Collaborative group projects with peer interaction goals",
                "Video modeling for complex social situations",
                "Structured conversation practice with topic maintenance",
            ],
        },
    },
    // Language and communication.
    ActivityCategory {
        applies: |obs| obs.speech_concern,
        lists: |band| match band {
            AgeBand::Toddler => &[
                "Picture exchange systems (PECS) for basic needs communication",
                "Simple sign language for daily routines",
                "Narrative play with favored characters and toys",
            ],
            AgeBand::Preschool => &[
                "Augmentative and Alternative Communication (AAC) device training",
                "Speech therapy with articulation and phonological games",
                "Storytelling activities with visual sequence cards",
            ],
            AgeBand::SchoolAge => &[
                "Advanced language therapy focusing on pragmatic skills",
                "Written expression activities with structured templates",
                "Public speaking practice in safe, supportive environments",
            ],
        },
    },
    // Sensory regulation (not age-banded).
    ActivityCategory {
        applies: |obs| obs.sensory_concern,
        lists: |_| {
            &[
                "Sensory diet activities including brushing, swinging, and proprioceptive input",
                "Gradual exposure therapy for sensory sensitivities",
                "Self-regulation techniques including deep breathing and mindfulness exercises",
                "Environmental modifications with noise-reducing headphones and fidget tools",
            ]
        },
    },
    // Emotional regulation; applies whenever any emotion sample was taken.
    ActivityCategory {
        applies: |obs| obs.distress() || obs.dominant.is_some(),
        lists: |band| match band {
            AgeBand::Toddler => &[
                "Emotion identification games using pictures and mirrors",
                "Comfort routines with preferred sensory activities",
                "Simple breathing exercises with bubbles or pinwheels",
            ],
            AgeBand::Preschool => &[
                "Feelings thermometer and emotional check-ins",
                "Cognitive behavioral therapy techniques adapted for children",
                "Art therapy and creative expression activities",
            ],
            AgeBand::SchoolAge => &[
                "Mindfulness and meditation practices",
                "Journaling and reflective writing exercises",
                "Advanced coping strategy development and practice",
            ],
        },
    },
    // Behavior supports (not age-banded).
    ActivityCategory {
        applies: Observations::anger,
        lists: |_| {
            &[
                "Positive behavior support plans with visual schedules",
                "Replacement behavior teaching with functional communication",
                "Token economy systems for motivation and behavior tracking",
                "Crisis prevention and de-escalation strategy practice",
            ]
        },
    },
];

fn universal_fillers(band: AgeBand) -> [String; 4] {
    let lead = band.pick(
        "Structured play routines",
        "Educational games",
        "Academic support activities",
    );
    [
        format!("{lead} targeting specific developmental goals"),
        "Family training and support sessions for home-based intervention strategies".to_string(),
        "Regular progress monitoring with data collection and analysis".to_string(),
        "Collaboration with educational team for consistent approaches".to_string(),
    ]
}

/// Collect activities for every matching category, deduplicated, padded
/// with universal fillers, and capped at [`MAX_ACTIVITIES`].
pub(crate) fn build_activities(obs: &Observations) -> Vec<String> {
    let mut activities: Vec<String> = Vec::new();

    for category in &CATEGORIES {
        if !(category.applies)(obs) {
            continue;
        }
        for activity in (category.lists)(obs.band) {
            let activity = activity.to_string();
            if !activities.contains(&activity) {
                activities.push(activity);
            }
        }
    }

    for filler in universal_fillers(obs.band) {
        if activities.len() >= MAX_ACTIVITIES {
            break;
        }
        if !activities.contains(&filler) {
            activities.push(filler);
        }
    }

    activities.truncate(MAX_ACTIVITIES);
    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::models::screening::ScreeningInput;

    fn obs(age: &str, eye: &str, speech: &str, sensory: &str) -> Observations {
        let input: ScreeningInput = serde_json::from_value(serde_json::json!({
            "age": age,
            "eye_contact": eye,
            "speech_level": speech,
            "social_response": "Engaged",
            "sensory_reactions": sensory,
        }))
        .unwrap();
        Observations::from_input(&input)
    }

    #[test]
    fn no_matches_still_yields_fillers() {
        let list = build_activities(&obs("4", "Good", "Fluent", "Resilient"));
        assert_eq!(list.len(), 4);
        assert!(list[0].starts_with("Educational games"));
    }

    #[test]
    fn matched_categories_come_before_fillers() {
        let list = build_activities(&obs("2", "Poor", "Limited", "Resilient"));
        assert!(list[0].contains("Turn-taking games"));
        assert!(list.iter().any(|a| a.contains("PECS")));
        assert!(list.len() <= MAX_ACTIVITIES);
    }

    #[test]
    fn cap_is_enforced_when_everything_matches() {
        let list = build_activities(&obs("2", "Poor", "Limited", "Sensitive"));
        assert_eq!(list.len(), MAX_ACTIVITIES);
    }
}
