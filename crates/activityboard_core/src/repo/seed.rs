//! Built-in Horizon Prep activity catalog (April 2024 reporting window).

use crate::model::activity::{Activity, ActivityStatus, ActivityType};
use chrono::NaiveDate;

/// Class names in selector display order.
pub const CLASS_NAMES: [&str; 7] = [
    "Grade 6A", "Grade 6B", "Grade 7A", "Grade 7B", "Grade 8A", "Grade 8B", "Faculty",
];

pub fn class_names() -> Vec<String> {
    CLASS_NAMES.iter().map(|name| (*name).to_string()).collect()
}

struct SeedRow {
    id: &'static str,
    title: &'static str,
    class_name: &'static str,
    kind: ActivityType,
    description: &'static str,
    advisor: &'static str,
    location: &'static str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    start_time: &'static str,
    end_time: &'static str,
    status: ActivityStatus,
    tags: &'static [&'static str],
    notes: Option<&'static str>,
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        id: "ACT-001",
        title: "Science Museum Exploration",
        class_name: "Grade 7A",
        kind: ActivityType::FieldTrip,
        description: "Hands-on learning experience covering physics exhibits and robotics lab tour.",
        advisor: "Ms. Patel",
        location: "City Science Museum",
        start: (2024, 4, 18),
        end: (2024, 4, 18),
        start_time: "09:00",
        end_time: "14:00",
        status: ActivityStatus::Scheduled,
        tags: &["STEM", "Experiential"],
        notes: Some("Permission slips due by April 12."),
    },
    SeedRow {
        id: "ACT-002",
        title: "Inter-House Basketball Finals",
        class_name: "Grade 8B",
        kind: ActivityType::Sports,
        description: "Annual inter-house basketball finals with cheering squads and halftime performance.",
        advisor: "Coach Ramirez",
        location: "Main Gymnasium",
        start: (2024, 4, 20),
        end: (2024, 4, 20),
        start_time: "16:30",
        end_time: "18:00",
        status: ActivityStatus::Scheduled,
        tags: &["Athletics", "Team Building"],
        notes: None,
    },
    SeedRow {
        id: "ACT-003",
        title: "Visual Arts Portfolio Review",
        class_name: "Grade 8A",
        kind: ActivityType::Arts,
        description: "Mid-term portfolio review focused on composition and color theory feedback.",
        advisor: "Mr. Nguyen",
        location: "Art Studio 2",
        start: (2024, 4, 19),
        end: (2024, 4, 19),
        start_time: "11:00",
        end_time: "12:30",
        status: ActivityStatus::Scheduled,
        tags: &["Creative", "Assessment"],
        notes: None,
    },
    SeedRow {
        id: "ACT-004",
        title: "Math Olympiad Training Camp",
        class_name: "Grade 7B",
        kind: ActivityType::Academics,
        description: "Weekend intensive training covering problem-solving strategies and mock tests.",
        advisor: "Dr. Wallace",
        location: "Room 304",
        start: (2024, 4, 27),
        end: (2024, 4, 28),
        start_time: "08:30",
        end_time: "16:00",
        status: ActivityStatus::Scheduled,
        tags: &["Competition", "Extension"],
        notes: None,
    },
    SeedRow {
        id: "ACT-005",
        title: "Community Garden Build Day",
        class_name: "Grade 6A",
        kind: ActivityType::Community,
        description: "Service project installing raised beds and planting spring vegetables.",
        advisor: "Ms. Hernandez",
        location: "South Courtyard",
        start: (2024, 4, 13),
        end: (2024, 4, 13),
        start_time: "10:00",
        end_time: "13:00",
        status: ActivityStatus::Completed,
        tags: &["Service", "Sustainability"],
        notes: None,
    },
    SeedRow {
        id: "ACT-006",
        title: "Faculty PD: Differentiated Instruction",
        class_name: "Faculty",
        kind: ActivityType::Administration,
        description: "Professional development workshop sharing strategies for mixed-ability classrooms.",
        advisor: "Instructional Team",
        location: "Library Conference Room",
        start: (2024, 4, 5),
        end: (2024, 4, 5),
        start_time: "15:30",
        end_time: "17:00",
        status: ActivityStatus::Completed,
        tags: &["PD", "Teaching"],
        notes: None,
    },
    SeedRow {
        id: "ACT-007",
        title: "Spring Musical Dress Rehearsal",
        class_name: "Grade 7A",
        kind: ActivityType::Arts,
        description: "Full run-through with costumes, lights, and audio checks before opening night.",
        advisor: "Mrs. Allen",
        location: "Auditorium",
        start: (2024, 4, 24),
        end: (2024, 4, 24),
        start_time: "18:00",
        end_time: "21:00",
        status: ActivityStatus::Scheduled,
        tags: &["Performance", "Production"],
        notes: None,
    },
    SeedRow {
        id: "ACT-008",
        title: "Robotics Club Showcase",
        class_name: "Grade 8B",
        kind: ActivityType::Academics,
        description: "Demonstrations of autonomous robots and presentations on engineering process.",
        advisor: "Mr. Ibrahim",
        location: "Innovation Lab",
        start: (2024, 4, 22),
        end: (2024, 4, 22),
        start_time: "13:00",
        end_time: "15:00",
        status: ActivityStatus::Scheduled,
        tags: &["STEM", "Showcase"],
        notes: None,
    },
    SeedRow {
        id: "ACT-009",
        title: "Eco Club Stream Cleanup",
        class_name: "Grade 6B",
        kind: ActivityType::Community,
        description: "Outdoor cleanup near Riverside Park with reflection session on conservation.",
        advisor: "Ms. Long",
        location: "Riverside Park",
        start: (2024, 4, 14),
        end: (2024, 4, 14),
        start_time: "09:30",
        end_time: "12:00",
        status: ActivityStatus::Completed,
        tags: &["Environment", "Field Work"],
        notes: None,
    },
    SeedRow {
        id: "ACT-010",
        title: "Parent-Teacher Conferences",
        class_name: "Grade 6A",
        kind: ActivityType::Administration,
        description: "Quarterly conferences with families focusing on academic progress and goals.",
        advisor: "Administration",
        location: "Multipurpose Hall",
        start: (2024, 4, 16),
        end: (2024, 4, 17),
        start_time: "17:00",
        end_time: "20:00",
        status: ActivityStatus::Scheduled,
        tags: &["Family Engagement"],
        notes: None,
    },
];

/// Returns the seed activities in catalog order.
pub fn activities() -> Vec<Activity> {
    SEED_ROWS.iter().map(SeedRow::to_activity).collect()
}

impl SeedRow {
    fn to_activity(&self) -> Activity {
        Activity {
            id: self.id.to_string(),
            title: self.title.to_string(),
            class_name: self.class_name.to_string(),
            kind: self.kind,
            description: self.description.to_string(),
            advisor: self.advisor.to_string(),
            location: self.location.to_string(),
            start_date: seed_date(self.start),
            end_date: seed_date(self.end),
            start_time: self.start_time.to_string(),
            end_time: self.end_time.to_string(),
            status: self.status,
            tags: self.tags.iter().map(|tag| (*tag).to_string()).collect(),
            notes: self.notes.map(str::to_string),
        }
    }
}

fn seed_date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar days")
}
