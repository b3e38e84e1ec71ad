use crate::state::ServerState;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{NAME}}</title>
<style>
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
#log p { margin: 0.25rem 0; }
#log .bot { color: #245; }
form { display: flex; gap: 0.5rem; margin-top: 1rem; }
input { flex: 1; padding: 0.4rem; }
</style>
</head>
<body data-bot-name="{{NAME}}">
<h1>{{NAME}}</h1>
<div id="log"></div>
<form id="chat">
<input id="message" name="message" autocomplete="off" autofocus>
<button type="submit">Send</button>
</form>
<script>
const botName = document.body.dataset.botName;
const log = document.getElementById("log");
const input = document.getElementById("message");
function line(who, text, cls) {
  const p = document.createElement("p");
  p.className = cls;
  p.textContent = who + ": " + text;
  log.appendChild(p);
}
document.getElementById("chat").addEventListener("submit", async (e) => {
  e.preventDefault();
  const message = input.value;
  input.value = "";
  line("You", message, "user");
  const res = await fetch("/api/message", {
    method: "POST",
    headers: { "content-type": "application/json" },
    body: JSON.stringify({ message }),
  });
  const body = await res.json();
  line(botName, body.reply ?? body.error, "bot");
});
</script>
</body>
</html>
"#;

/// `GET /`: a minimal chat page posting to `/api/message`.
pub async fn chat_page(State(state): State<Arc<ServerState>>) -> Html<String> {
    Html(render_page(&state.bot_name))
}

/// The name only appears in HTML text and attribute context; the script reads
/// it back from `data-bot-name`.
pub fn render_page(bot_name: &str) -> String {
    PAGE_TEMPLATE.replace("{{NAME}}", &escape_html(bot_name))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
