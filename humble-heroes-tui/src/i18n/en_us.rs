//! 英文翻译 (en-US)

use super::keys::{AppTexts, FormTexts, HelpTexts, HintTexts, ListTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    app: AppTexts {
        title: "🦸 Humble Superheroes",
        api: "API",
    },
    form: FormTexts {
        title: "New Superhero",
        name_label: "Name",
        superpower_label: "Superpower",
        humility_label: "Humility Score",
        add_button: "Add Superhero",
        adding: "Adding...",
    },
    list: ListTexts {
        title: "Superheroes",
        loading: "Loading superheroes...",
        empty: "No superheroes yet",
        power: "Power",
        humility: "Humility",
    },
    hints: HintTexts {
        switch_field: "Switch Field",
        submit: "Add",
        select: "Select",
        refresh: "Refresh",
        help: "Help",
        quit: "Quit",
        close: "Close",
    },
    help: HelpTexts {
        title: " Help ",
        form_section: "Form",
        global_section: "Global shortcuts",
        next_field: "Next field",
        prev_field: "Previous field",
        submit: "Add superhero",
        delete_char: "Delete character",
        select: "Move selection",
        jump: "First / last hero",
        refresh: "Reload list",
        help: "Show this help",
        quit: "Quit",
        close_hint: "Press Esc to close the help",
    },
};
