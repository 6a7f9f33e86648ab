//! Inline page shells for the login flow and the board. No template
//! engine; two small documents rendered from string literals.

use axum::response::Html;

/// Shown on the login form after a failed attempt.
pub const LOGIN_ERROR: &str = "Invalid credentials. Please try again.";

/// Login form, with an optional error line above it.
pub fn login(error: Option<&str>) -> Html<String> {
    let notice = error
        .map(|text| format!(r#"<p class="error">{text}</p>"#))
        .unwrap_or_default();

    Html(format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Shoutbox login</title></head>
<body>
<h1>Shoutbox</h1>
{notice}
<form method="post" action="/login">
  <label>Username <input type="text" name="username" autofocus></label>
  <label>Password <input type="password" name="password"></label>
  <button type="submit">Log in</button>
</form>
</body>
</html>
"#
    ))
}

/// Board page for authenticated users: a composer plus the most recent
/// messages. The timestamp is filled in by the client, which is what the
/// send endpoint expects.
pub fn board() -> Html<&'static str> {
    Html(BOARD_PAGE)
}

const BOARD_PAGE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Shoutbox</title></head>
<body>
<h1>Shoutbox</h1>
<form id="composer">
  <input type="text" name="message" placeholder="Say something" autofocus>
  <button type="submit">Send</button>
</form>
<ul id="messages"></ul>
<script>
async function refresh() {
  const res = await fetch('/retrieve');
  if (!res.ok) {
    window.location = '/login';
    return;
  }
  const messages = await res.json();
  const list = document.getElementById('messages');
  list.innerHTML = '';
  for (const m of messages) {
    const item = document.createElement('li');
    item.textContent = '[' + m.timestamp + '] ' + m.message;
    list.appendChild(item);
  }
}

document.getElementById('composer').addEventListener('submit', async (event) => {
  event.preventDefault();
  const body = new URLSearchParams();
  body.set('message', event.target.message.value);
  body.set('timestamp', new Date().toISOString());
  await fetch('/send', { method: 'POST', body });
  event.target.reset();
  refresh();
});

refresh();
</script>
</body>
</html>
"#;
