//! The hardcoded sample catalog the application starts with.
//!
//! Four projects across three categories, with full step lists and
//! engagement counters. All content here is display data; nothing outside
//! this module assumes any particular seed entry exists (tests do).

use crate::model::{Difficulty, Project, ProjectStep};
use crate::store::AppState;

fn step(
    id: &str,
    title: &str,
    description: &str,
    materials: &[&str],
    tips: &[&str],
) -> ProjectStep {
    ProjectStep {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        materials: materials.iter().map(ToString::to_string).collect(),
        tips: tips.iter().map(ToString::to_string).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// The sample projects, in catalog display order.
#[must_use]
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Macrame Wall Hanging".to_string(),
            description: "Create a beautiful boho-style wall decoration using simple \
                          macrame knots and natural cotton cord."
                .to_string(),
            image: "assets/project-macrame.jpg".to_string(),
            author: "Sarah M.".to_string(),
            difficulty: Difficulty::Easy,
            estimated_time: "2-3 hours".to_string(),
            rating: 4.8,
            category: "Arts & Crafts".to_string(),
            tags: strings(&["boho", "macrame", "wall-art", "beginner-friendly"]),
            materials: strings(&[
                "Cotton cord (4mm)",
                "Wooden dowel (12 inches)",
                "Scissors",
                "Comb",
                "Measuring tape",
            ]),
            tools: strings(&["Scissors", "Comb", "Measuring tape"]),
            steps: vec![
                step(
                    "step-1",
                    "Prepare Your Materials",
                    "Cut 8 pieces of cotton cord, each 3 feet long. Attach them to the \
                     wooden dowel using lark's head knots.",
                    &["Cotton cord (4mm)", "Wooden dowel", "Scissors"],
                    &["Make sure all cords are the same length for an even pattern"],
                ),
                step(
                    "step-2",
                    "Create the Base Pattern",
                    "Work square knots in rows to create a diamond pattern. Start with \
                     the center cords and work outward.",
                    &[],
                    &["Keep tension consistent", "Count your knots to maintain symmetry"],
                ),
                step(
                    "step-3",
                    "Add Fringe Details",
                    "Comb out the bottom ends to create a flowing fringe effect. Trim \
                     to desired length.",
                    &[],
                    &[
                        "Comb gently to avoid breaking fibers",
                        "Trim gradually for best results",
                    ],
                ),
            ],
            views: 1247,
            likes: 89,
            completions: 156,
            created_at: "2024-01-15".to_string(),
        },
        Project {
            id: "2".to_string(),
            title: "Smart Garden Monitor".to_string(),
            description: "Build an Arduino-based IoT system to monitor your plants' soil \
                          moisture, temperature, and light levels."
                .to_string(),
            image: "assets/coding-projects.jpg".to_string(),
            author: "Alex K.".to_string(),
            difficulty: Difficulty::Medium,
            estimated_time: "4-6 hours".to_string(),
            rating: 4.6,
            category: "Coding Projects".to_string(),
            tags: strings(&["arduino", "iot", "gardening", "sensors"]),
            materials: strings(&[
                "Arduino Uno",
                "Soil moisture sensor",
                "DHT22 sensor",
                "Breadboard",
                "Jumper wires",
                "LCD display",
            ]),
            tools: strings(&["Soldering iron", "Wire strippers", "Computer", "Arduino IDE"]),
            steps: vec![
                step(
                    "step-1",
                    "Set Up Arduino IDE",
                    "Install Arduino IDE and necessary libraries for sensors and WiFi \
                     connectivity.",
                    &["Computer", "Arduino IDE"],
                    &["Make sure to install the DHT sensor library"],
                ),
                step(
                    "step-2",
                    "Wire the Sensors",
                    "Connect the soil moisture sensor, temperature sensor, and LCD \
                     display to the Arduino.",
                    &[],
                    &[
                        "Double-check connections before powering on",
                        "Use breadboard for prototyping",
                    ],
                ),
                step(
                    "step-3",
                    "Write the Code",
                    "Program the Arduino to read sensor data and display it on the LCD \
                     screen.",
                    &[],
                    &["Test each sensor individually first", "Add delay between readings"],
                ),
                step(
                    "step-4",
                    "Add WiFi Connectivity",
                    "Enable the device to send data to a cloud service for remote \
                     monitoring.",
                    &[],
                    &[
                        "Secure your WiFi credentials",
                        "Consider using MQTT for communication",
                    ],
                ),
            ],
            views: 892,
            likes: 67,
            completions: 43,
            created_at: "2024-01-20".to_string(),
        },
        Project {
            id: "3".to_string(),
            title: "Kitchen Cabinet Repair".to_string(),
            description: "Fix loose hinges and replace worn cabinet doors with \
                          professional techniques and tools."
                .to_string(),
            image: "assets/home-fixes.jpg".to_string(),
            author: "Mike D.".to_string(),
            difficulty: Difficulty::Medium,
            estimated_time: "3-4 hours".to_string(),
            rating: 4.3,
            category: "Home Fixes".to_string(),
            tags: strings(&["kitchen", "cabinet", "repair", "woodworking"]),
            materials: strings(&[
                "Cabinet hinges",
                "Wood screws",
                "Wood filler",
                "Sandpaper",
                "Wood stain",
                "Cabinet doors",
            ]),
            tools: strings(&["Drill", "Screwdriver", "Level", "Measuring tape", "Chisel"]),
            steps: vec![
                step(
                    "step-1",
                    "Remove Old Hardware",
                    "Carefully remove old hinges and handles. Mark positions for \
                     reference.",
                    &[],
                    &[
                        "Take photos before removing for reference",
                        "Save screws in labeled containers",
                    ],
                ),
                step(
                    "step-2",
                    "Repair and Prep",
                    "Fill screw holes with wood filler, sand smooth, and prepare \
                     surfaces for new hardware.",
                    &[],
                    &["Let wood filler dry completely before sanding"],
                ),
                step(
                    "step-3",
                    "Install New Hardware",
                    "Mount new hinges and adjust doors for proper alignment and \
                     operation.",
                    &[],
                    &[
                        "Use a level to ensure doors hang straight",
                        "Test operation before final tightening",
                    ],
                ),
            ],
            views: 1156,
            likes: 78,
            completions: 94,
            created_at: "2024-01-18".to_string(),
        },
        Project {
            id: "4".to_string(),
            title: "Terrarium Garden".to_string(),
            description: "Create a miniature ecosystem in a glass container with \
                          succulents and decorative elements."
                .to_string(),
            image: "assets/hero-crafts.jpg".to_string(),
            author: "Emma L.".to_string(),
            difficulty: Difficulty::Easy,
            estimated_time: "1-2 hours".to_string(),
            rating: 4.7,
            category: "Arts & Crafts".to_string(),
            tags: strings(&["terrarium", "succulents", "gardening", "decorative"]),
            materials: strings(&[
                "Glass container",
                "Succulents",
                "Potting soil",
                "Activated charcoal",
                "Decorative stones",
            ]),
            tools: strings(&["Small spoon", "Tweezers", "Spray bottle"]),
            steps: vec![
                step(
                    "step-1",
                    "Layer the Base",
                    "Add drainage layer of stones, then activated charcoal, followed \
                     by potting soil.",
                    &[],
                    &["Charcoal prevents odors and improves drainage"],
                ),
                step(
                    "step-2",
                    "Plant Succulents",
                    "Carefully arrange and plant your succulents, leaving space for \
                     growth.",
                    &[],
                    &["Use tweezers for delicate placement", "Don't overcrowd plants"],
                ),
                step(
                    "step-3",
                    "Add Finishing Touches",
                    "Decorate with stones, moss, or miniature figurines. Mist lightly.",
                    &[],
                    &["Less is more with watering", "Place in bright, indirect light"],
                ),
            ],
            views: 934,
            likes: 102,
            completions: 187,
            created_at: "2024-01-22".to_string(),
        },
    ]
}

/// The initial application state: the sample catalog plus empty tracking.
#[must_use]
pub fn seed_state() -> AppState {
    AppState {
        projects: seed_projects(),
        ..AppState::default()
    }
}
