use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
nav { display: flex; gap: 16px; padding: 12px 24px; background: #1e293b; }
nav a { color: #e2e8f0; text-decoration: none; font-weight: 600; }
main { max-width: 960px; margin: 24px auto; padding: 0 16px; }
.layout { display: flex; gap: 24px; }
.sidebar { min-width: 180px; }
.sidebar h3 { margin-bottom: 4px; }
.sidebar a { display: block; color: #2563eb; text-decoration: none; padding: 2px 0; }
.sidebar a.active { font-weight: 700; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; flex: 1; }
.recipe-card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; }
.recipe-card h3 { margin-top: 0; }
.tags { font-size: 13px; color: #6b7280; }
.match { font-size: 13px; color: #16a34a; }
.pager { margin-top: 24px; display: flex; gap: 12px; align-items: center; }
form.pantry input[type=text] { width: 100%; padding: 8px; margin: 8px 0; }
button { padding: 8px 16px; background: #2563eb; color: white; border: 0; border-radius: 6px; }
";

pub fn base(title: &str, inner: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav {
                    a href="/" { "Larder" }
                    a href="/ingredients" { "My pantry" }
                    a href="/recipes" { "Browse recipes" }
                }
                main { (inner) }
            }
        }
    }
}

pub fn error_page(message: &str) -> Markup {
    base(
        "Something went wrong",
        html! {
            h1 { "Something went wrong" }
            p { (message) }
            p { a href="/" { "Back to the start" } }
        },
    )
}
