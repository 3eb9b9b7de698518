//! Primary goal categories and the supplementary goal pool.

use crate::Observations;

/// Goals are padded up to and capped at this count.
pub const MAX_GOALS: usize = 6;

/// Appended when the pool cannot fill the plan to [`MAX_GOALS`].
fn closing_goal(age: u32) -> String {
    format!(
        "Demonstrate measurable progress in adaptive behavioral skills \
         appropriate for {age}-year developmental stage within 12 weeks"
    )
}

struct GoalCategory {
    focus: &'static str,
    matches: fn(&Observations) -> bool,
    goal: fn(&Observations) -> String,
}

/// The six primary categories, evaluated in this order.
const CATEGORIES: [GoalCategory; 6] = [
    GoalCategory {
        focus: "Social Communication & Eye Contact Development",
        matches: |obs| obs.eye_contact_concern,
        goal: |obs| {
            let (hold, horizon) = if obs.age < 3 {
                ("2-3", "6 months")
            } else {
                ("3-5", "3 months")
            };
            format!(
                "Establish consistent eye contact for {hold} seconds during \
                 preferred activities by {horizon}"
            )
        },
    },
    GoalCategory {
        focus: "Expressive Communication & Language Development",
        matches: |obs| obs.speech_concern,
        goal: |obs| {
            let mode = obs.band.pick(
                "gestures and simple words",
                "multi-word phrases",
                "complex sentences",
            );
            format!(
                "Increase functional communication using {mode} to express \
                 needs within 4-6 weeks"
            )
        },
    },
    GoalCategory {
        focus: "Sensory Processing & Regulation",
        matches: |obs| obs.sensory_concern,
        goal: |obs| {
            let setting = if obs.age < 3 {
                "play routines"
            } else {
                "daily activities"
            };
            format!(
                "Demonstrate improved sensory tolerance and self-regulation \
                 strategies during {setting} within 8 weeks"
            )
        },
    },
    GoalCategory {
        focus: "Social Interaction & Peer Engagement",
        matches: |obs| obs.social_concern,
        goal: |obs| {
            let (partner, span) = if obs.age < 3 {
                ("caregivers", "3-5")
            } else {
                ("peers", "5-10")
            };
            format!(
                "Initiate and maintain appropriate social interactions with \
                 {partner} for {span} minutes during structured activities"
            )
        },
    },
    GoalCategory {
        focus: "Emotional Regulation & Anxiety Management",
        matches: Observations::distress,
        goal: |obs| {
            let level = if obs.age < 3 { "basic" } else { "advanced" };
            format!(
                "Implement {level} calming strategies and reduce \
                 anxiety-related behaviors through structured comfort \
                 routines within 6 weeks"
            )
        },
    },
    GoalCategory {
        focus: "Behavioral Management & Emotional Expression",
        matches: Observations::anger,
        goal: |obs| {
            let weeks = if obs.age < 6 { "8" } else { "6" };
            format!(
                "Develop appropriate emotional expression and reduce \
                 challenging behaviors using positive behavior supports \
                 within {weeks} weeks"
            )
        },
    },
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Priority {
    Low,
    Medium,
    High,
}

struct SupplementaryGoal {
    priority: fn(&Observations) -> Priority,
    goal: fn(&Observations) -> String,
}

/// The supplementary pool, appended in priority order until the plan holds
/// [`MAX_GOALS`] goals.
const SUPPLEMENTARY_POOL: [SupplementaryGoal; 6] = [
    // Self-help skills.
    SupplementaryGoal {
        priority: |obs| {
            if obs.age < 6 {
                Priority::High
            } else {
                Priority::Medium
            }
        },
        goal: |obs| {
            let skills = obs.band.pick(
                "basic feeding and dressing assistance",
                "independent dressing and feeding",
                "complex daily living tasks",
            );
            format!(
                "Develop age-appropriate self-help skills including {skills} \
                 within 12 weeks"
            )
        },
    },
    // Attention span.
    SupplementaryGoal {
        priority: |_| Priority::High,
        goal: |obs| {
            let minutes = obs.band.pick("5-8", "10-15", "15-20");
            format!(
                "Improve attention span to {minutes} minutes for structured \
                 learning activities using visual supports and reinforcement"
            )
        },
    },
    // Joint attention.
    SupplementaryGoal {
        priority: |obs| {
            if obs.age < 6 {
                Priority::High
            } else {
                Priority::Medium
            }
        },
        goal: |obs| {
            let medium = obs.band.pick(
                "simple pointing games",
                "shared book reading",
                "collaborative problem-solving",
            );
            format!(
                "Enhance joint attention skills through {medium} and \
                 interactive play sessions"
            )
        },
    },
    // Emotional vocabulary.
    SupplementaryGoal {
        priority: |obs| {
            if obs.distress() {
                Priority::High
            } else {
                Priority::Medium
            }
        },
        goal: |obs| {
            let tools = obs.band.pick(
                "basic emotion cards",
                "picture cards and social stories",
                "complex emotional scenarios",
            );
            format!(
                "Build emotional vocabulary and expression through {tools} \
                 within 10 weeks"
            )
        },
    },
    // Motor skills.
    SupplementaryGoal {
        priority: |_| Priority::Medium,
        goal: |obs| {
            let target = obs.band.pick(
                "gross motor skills through play",
                "fine motor skills for writing preparation",
                "advanced motor coordination",
            );
            format!("Strengthen {target} to support daily living tasks")
        },
    },
    // Coping with overload.
    SupplementaryGoal {
        priority: |obs| {
            use sprout_core::models::emotion::Emotion;
            match obs.dominant {
                Some(Emotion::Fear) | Some(Emotion::Angry) => Priority::High,
                _ => Priority::Low,
            }
        },
        goal: |obs| {
            let stressor = if obs.age < 3 {
                "overstimulation"
            } else {
                "sensory overload"
            };
            format!(
                "Develop coping strategies for {stressor} and emotional \
                 regulation during daily transitions within 8 weeks"
            )
        },
    },
];

/// Evaluate the category table, returning deduplicated focus areas and the
/// goal list padded from the supplementary pool.
pub(crate) fn build_goals(obs: &Observations) -> (Vec<String>, Vec<String>) {
    let mut focus_areas: Vec<String> = Vec::new();
    let mut goals: Vec<String> = Vec::new();

    for category in &CATEGORIES {
        if !(category.matches)(obs) {
            continue;
        }
        let focus = category.focus.to_string();
        if !focus_areas.contains(&focus) {
            focus_areas.push(focus);
        }
        let goal = (category.goal)(obs);
        if !goals.contains(&goal) {
            goals.push(goal);
        }
    }

    // Stable sort keeps the pool's declaration order within each priority.
    let mut pool: Vec<&SupplementaryGoal> = SUPPLEMENTARY_POOL.iter().collect();
    pool.sort_by_key(|item| std::cmp::Reverse((item.priority)(obs)));

    for item in pool {
        if goals.len() >= MAX_GOALS {
            break;
        }
        let goal = (item.goal)(obs);
        if !goals.contains(&goal) {
            goals.push(goal);
        }
    }

    if goals.len() < MAX_GOALS {
        goals.push(closing_goal(obs.age));
    }
    goals.truncate(MAX_GOALS);

    (focus_areas, goals)
}
