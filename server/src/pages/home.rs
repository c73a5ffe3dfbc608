use maud::{html, Markup};

use crate::templates;

pub async fn home() -> Markup {
    templates::base(
        "Larder",
        html! {
            h1 { "What's in your pantry?" }
            p {
                "Tell us what you have on hand and we'll find recipes that "
                "use it, or browse the whole collection by cuisine, diet, "
                "and prep time."
            }
            p {
                a href="/ingredients" { "Enter your ingredients" }
            }
            p {
                a href="/recipes" { "Browse all recipes" }
            }
        },
    )
}
