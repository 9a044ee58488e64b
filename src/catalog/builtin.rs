//! The default catalog: the student projects shown when no catalog file is
//! given.

use crate::catalog::types::ProjectEntry;

fn entry(
    id: u32,
    title: &str,
    category: &str,
    short_description: &str,
    long_description: &str,
    image: &str,
) -> ProjectEntry {
    ProjectEntry {
        id,
        title: title.to_string(),
        category: category.to_string(),
        short_description: short_description.to_string(),
        long_description: long_description.to_string(),
        image: image.to_string(),
        demo: None,
    }
}

pub fn builtin_entries() -> Vec<ProjectEntry> {
    vec![
        entry(
            1,
            "Mini Kitchen",
            "Scratch Game",
            "Create dishes by following recipes in this interactive cooking game.",
            "Mini Kitchen is a fun game made in Scratch where you receive a recipe and must \
             assemble the ingredients to make the dish. Enjoy experimenting with different \
             recipes and see what you can cook up! by Shanice Munro Form 2-3",
            "/mini-kitchen.png",
        ),
        entry(
            2,
            "Mini Arena WIP",
            "Scratch Game",
            "Choose your ball and battle to victory in this action-packed arena game.",
            "Mini Arena WIP is an exciting battle game made in Scratch where you choose one of \
             three balls and attack all the other balls until you defeat both opponents and \
             claim victory. Created by Joshua O'Connor in Form 4-7, this work-in-progress game \
             offers strategic combat gameplay with multiple ball characters to choose from.",
            "/ball-arena.png",
        ),
        entry(
            3,
            "Power Island",
            "Python Game",
            "Sustainable energy management simulation game set on a Caribbean island.",
            "Power Island is an educational strategy simulation game developed in Python using \
             PyGame, where players manage a virtual Caribbean island's energy system. The goal \
             is to create sustainable energy infrastructure while balancing population needs, \
             economy, and environment. Players start with limited budget and must strategically \
             invest in renewable vs non-renewable energy, manage natural disasters, track \
             pollution impact, and trade with AI-controlled neighboring islands. Created by \
             Matthew Williams (5-3), Tori Senior (5-5), Tjon Smith (5-1), and Amari Cross (5-3) \
             for the Caribbean STEAM Olympiad, this project won 2nd place and earned a silver \
             medal. The game educates players about Caribbean energy challenges and promotes \
             sustainable thinking through critical decision-making.",
            "/power-island.png",
        ),
        entry(
            4,
            "Homework Todo Website",
            "Web Development",
            "A todo app for managing homework tasks.",
            "A straightforward homework todo website with essential functionality for task \
             management. Users can add new homework tasks, delete individual tasks, and clear \
             all tasks at once with a delete all feature. Created by Kytto Valentine in Form \
             2-1, this clean and simple web application focuses on core todo functionality \
             without unnecessary complexity.",
            "/homework-todo.png",
        ),
        entry(
            5,
            "Console Wordle",
            "Python Game",
            "A 2-player console-based word guessing game inspired by Wordle.",
            "Console Wordle is a Python-based command-line implementation of the popular Wordle \
             game with a competitive 2-player twist. Players alternate between setting 5-letter \
             words and guessing them, with each guesser having 5 attempts to find the correct \
             word. The game features letter feedback (correct position, wrong position, or not \
             in word), customizable number of rounds, score tracking, and terminal clearing for \
             privacy between turns. Created by Jianna Thomas in Form 4-2, this interactive \
             console application brings the addictive word-guessing gameplay to the terminal \
             with a fun multiplayer format.",
            "/wordle.png",
        ),
        entry(
            6,
            "Strategic Planning Reporting Tool",
            "Business Application",
            "A comprehensive quarterly planning and objective tracking system concept.",
            "Strategic Planning Reporting Tool is a school management application concept \
             designed to streamline academic goal-setting and performance tracking for \
             educational institutions. The system features quarterly planning modules (Q1, Q2, \
             etc.), academic objectives management with detailed tracking capabilities, target \
             setting with progress monitoring, and comprehensive reporting dashboards with data \
             visualization. Users can create, edit, and delete academic objectives, set \
             measurable targets, track completion percentages, and generate detailed reports \
             for school performance analysis. Created by Tori Senior in Form 5-5, this concept \
             demonstrates modern UI/UX principles for educational planning tools with intuitive \
             navigation and clear data presentation.",
            "/sprt.png",
        ),
    ]
}
