//! The `eduquest init` command: writes the starter game content.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("games")?;

    for (file_name, content) in STARTER_GAMES {
        let path = Path::new("games").join(file_name);
        if path.exists() {
            println!("games/{file_name} already exists, skipping.");
        } else {
            std::fs::write(&path, content)?;
            println!("Created games/{file_name}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Run: eduquest validate");
    println!("  2. Run: eduquest games");
    println!("  3. Run: eduquest play --game logic-quest");

    Ok(())
}

const STARTER_GAMES: [(&str, &str); 4] = [
    ("logic-quest.toml", LOGIC_QUEST),
    ("it-quest.toml", IT_QUEST),
    ("think-quest.toml", THINK_QUEST),
    ("edu-quiz.toml", EDU_QUIZ),
];

const LOGIC_QUEST: &str = r#"[game]
id = "logic-quest"
title = "Logic Quest"

[[levels]]
title = "Level 1 - Number Sequence"
instruction = "Pick the number that completes the sequence: 2, 4, 6, ?"
question = "2, 4, 6, ?"
choices = ["7", "8", "9", "10"]
correct = 1
points = 10

[[levels]]
title = "Level 2 - Simple Pattern"
instruction = "Pick the symbol group that completes the pattern: *, **, ***, ?"
question = "*, **, ***, ?"
choices = ["****", "**", "*****", "*"]
correct = 0
points = 15

[[levels]]
title = "Level 3 - Number Series"
instruction = "Find the next number: 1, 1, 2, 3, 5, ? (the Fibonacci series)"
question = "1, 1, 2, 3, 5, ?"
choices = ["6", "7", "8", "5"]
correct = 2
points = 20
"#;

const IT_QUEST: &str = r#"[game]
id = "it-quest"
title = "IT Quest"

[[levels]]
title = "Level 1 - Strong Passwords"
instruction = "Which option makes the strongest password?"
question = "Pick the best password option"
choices = ["12345678", "password", "YourName2026!", "qwerty"]
correct = 2
points = 10

[[levels]]
title = "Level 2 - Account Safety"
instruction = "Which action keeps an online account safest?"
question = "Pick the safest action"
choices = [
    "Sharing your password with a friend",
    "Enabling two-factor authentication",
    "Using public Wi-Fi without a VPN",
    "Skipping software updates",
]
correct = 1
points = 15

[[levels]]
title = "Level 3 - Internet Basics"
instruction = "What is a browser?"
question = "Pick the right answer"
choices = [
    "An application for opening websites",
    "A piece of network hardware",
    "A programming language",
    "An operating system",
]
correct = 0
points = 20
"#;

const THINK_QUEST: &str = r#"[game]
id = "think-quest"
title = "Think Quest"

[[levels]]
title = "Level 1 - Wise Choices"
instruction = "If you lose an assignment, the best action is?"
question = "What should you do?"
choices = [
    "Ignore it",
    "Contact the teacher and ask for an extension",
    "Copy from a friend",
    "Delete your account",
]
correct = 1
points = 10

[[levels]]
title = "Level 2 - Quick Scenario"
instruction = "You have 30 minutes for homework and 2 hours to play. Priority?"
question = "Pick the best response"
choices = ["Play first", "Do the homework first", "Check social media", "Take a nap"]
correct = 1
points = 15

[[levels]]
title = "Level 3 - Problem Solving"
instruction = "How do you break a big problem into small tasks?"
question = "Pick the first step"
choices = [
    "Postpone it until it solves itself",
    "Make a list of subtasks",
    "Delete all your files",
    "Give up right away",
]
correct = 1
points = 20
"#;

const EDU_QUIZ: &str = r#"[game]
id = "edu-quiz"
title = "Edu Quiz"

[[levels]]
title = "Level 1 - General Knowledge"
instruction = "A quick general-knowledge check"
question = "What is the capital of Indonesia?"
choices = ["Bandung", "Surabaya", "Jakarta", "Medan"]
correct = 2
points = 10

[[levels]]
title = "Level 2 - Light Science"
instruction = "Which gas do we inhale the most?"
question = "Pick the answer"
choices = ["Oxygen", "Nitrogen", "Carbon dioxide", "Hydrogen"]
correct = 1
points = 15

[[levels]]
title = "Level 3 - A Bit of History"
instruction = "Which year marked Indonesia's proclamation of independence?"
question = "Year of the proclamation?"
choices = ["1945", "1950", "1939", "1965"]
correct = 0
points = 20
"#;
