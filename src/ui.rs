use crate::models::{BoardSnapshot, Priority, Task};
use chrono::NaiveDateTime;

pub fn render_todo(snapshot: &BoardSnapshot) -> String {
    let progress = &snapshot.progress;
    TODO_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{NAV}}", &nav("/"))
        .replace("{{USER_ID}}", &escape(&snapshot.identity.user_id))
        .replace("{{DISPLAY_ID}}", &escape(&snapshot.identity.display_id))
        .replace("{{LEVEL}}", &progress.level.to_string())
        .replace("{{NEXT_LEVEL}}", &(progress.level + 1).to_string())
        .replace("{{COMPLETED}}", &snapshot.completed_count.to_string())
        .replace("{{XP}}", &snapshot.xp.to_string())
        .replace("{{XP_IN_LEVEL}}", &progress.xp_in_level.to_string())
        .replace("{{LEVEL_XP}}", &progress.level_xp.to_string())
        .replace("{{PERCENT}}", &format!("{:.1}", progress.percent))
        .replace("{{PRIORITY_OPTIONS}}", &priority_options())
        .replace("{{TASKS}}", &task_rows(&snapshot.tasks, "/", true))
        .replace("{{UPCOMING_COUNT}}", &snapshot.upcoming_count.to_string())
        .replace("{{UPCOMING}}", &upcoming_list(&snapshot.upcoming))
        .replace("{{HISTORY}}", &history_list(snapshot))
        .replace("{{REWARDS}}", &reward_rows(snapshot))
}

pub fn render_home(snapshot: &BoardSnapshot, now: NaiveDateTime) -> String {
    HOME_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{NAV}}", &nav("/home"))
        .replace("{{USER_ID}}", &escape(&snapshot.identity.user_id))
        .replace("{{TIME}}", &now.format("%H:%M").to_string())
        .replace("{{DATE}}", &now.format("%A, %B %-d, %Y").to_string())
        .replace("{{CLASSES}}", &class_rows(snapshot))
        .replace("{{TASKS}}", &task_rows(&snapshot.tasks, "/home", false))
        .replace("{{NOTES}}", &note_rows(snapshot))
}

fn nav(active: &str) -> String {
    [("/", "Gamified To-Do"), ("/home", "Home")]
        .iter()
        .map(|(href, label)| {
            let class = if *href == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect()
}

fn priority_options() -> String {
    Priority::ALL
        .iter()
        .map(|priority| format!("<option>{priority}</option>"))
        .collect()
}

fn task_rows(tasks: &[Task], return_to: &str, show_meta: bool) -> String {
    if tasks.is_empty() {
        return "<div class=\"empty\">No tasks yet!</div>".to_string();
    }

    tasks
        .iter()
        .map(|task| {
            let state = if task.completed { "task done" } else { "task" };
            let meta = if show_meta { task_meta(task) } else { String::new() };
            let done = if task.completed {
                String::new()
            } else {
                format!(
                    "<form method=\"post\" action=\"/tasks/{id}/complete\">{hidden}<button class=\"pill\" title=\"Mark as done\">Done</button></form>",
                    id = escape(&task.id),
                    hidden = return_field(return_to),
                )
            };
            format!(
                "<div class=\"{state}\"><div class=\"task-body\"><span class=\"task-text\">{text}</span>{meta}</div>\
                 <div class=\"actions\">{done}<form method=\"post\" action=\"/tasks/{id}/delete\">{hidden}<button class=\"danger\" title=\"Delete\">&#x2715;</button></form></div></div>",
                text = escape(&task.text),
                id = escape(&task.id),
                hidden = return_field(return_to),
            )
        })
        .collect()
}

fn task_meta(task: &Task) -> String {
    let due = task
        .due
        .map(|due| format!("<span>Due: {due}</span>"))
        .unwrap_or_default();
    format!(
        "<div class=\"meta\">{due}<span>Priority: <span class=\"priority-{}\">{}</span></span></div>",
        task.priority.as_str().to_ascii_lowercase(),
        task.priority
    )
}

fn upcoming_list(upcoming: &[Task]) -> String {
    if upcoming.is_empty() {
        return "<div class=\"empty small\">No uncompleted tasks!</div>".to_string();
    }
    let items: String = upcoming
        .iter()
        .map(|task| format!("<li>{}</li>", escape(&task.text)))
        .collect();
    format!("<ul class=\"bullets\">{items}</ul>")
}

fn history_list(snapshot: &BoardSnapshot) -> String {
    if snapshot.recent_history.is_empty() {
        return "<div class=\"empty small\">No XP history yet.</div>".to_string();
    }
    let items: String = snapshot
        .recent_history
        .iter()
        .map(|entry| {
            let (class, sign) = if entry.delta > 0 { ("gain", "+") } else { ("loss", "") };
            format!(
                "<li>{} <span class=\"{class}\">{sign}{} XP</span></li>",
                escape(&entry.label),
                entry.delta
            )
        })
        .collect();
    format!("<ul class=\"history\">{items}</ul>")
}

fn reward_rows(snapshot: &BoardSnapshot) -> String {
    snapshot
        .rewards
        .iter()
        .map(|view| {
            let reward = &view.reward;
            let disabled = if view.can_redeem { "" } else { " disabled" };
            format!(
                "<div class=\"reward\"><span class=\"emoji\">{emoji}</span><div class=\"reward-body\"><div>{label}</div><div class=\"small muted\">{cost} XP</div></div>\
                 <form method=\"post\" action=\"/rewards/{id}/redeem\">{hidden}<button class=\"pill\"{disabled}>Redeem</button></form></div>",
                emoji = reward.emoji,
                label = escape(reward.label),
                cost = reward.cost,
                id = reward.id,
                hidden = return_field("/"),
            )
        })
        .collect()
}

fn class_rows(snapshot: &BoardSnapshot) -> String {
    snapshot
        .classes
        .iter()
        .map(|class| {
            format!(
                "<li class=\"class\"><span class=\"class-name\">{}</span><span class=\"small\">{}</span><span class=\"small muted\">{}</span></li>",
                escape(class.name),
                escape(class.time),
                escape(class.location)
            )
        })
        .collect()
}

fn note_rows(snapshot: &BoardSnapshot) -> String {
    if snapshot.notes.is_empty() {
        return "<div class=\"empty small\">Nothing jotted down yet.</div>".to_string();
    }
    snapshot
        .notes
        .iter()
        .map(|note| {
            format!(
                "<div class=\"note\"><span>{text}</span><form method=\"post\" action=\"/notes/{id}/delete\">{hidden}<button class=\"danger\" title=\"Delete\">&#x2715;</button></form></div>",
                text = escape(&note.text),
                id = escape(&note.id),
                hidden = return_field("/home"),
            )
        })
        .collect()
}

fn return_field(return_to: &str) -> String {
    format!("<input type=\"hidden\" name=\"return_to\" value=\"{return_to}\" />")
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            other => out.push(other),
        }
    }
    out
}

const STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap');

    :root {
      --bg: #f8f9fb;
      --ink: #1f2430;
      --muted: #8a8f9c;
      --accent: #6c63ff;
      --accent-dark: #554fd8;
      --card: #ffffff;
      --shadow: 0 6px 20px rgba(31, 36, 48, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Helvetica Neue", sans-serif;
      display: flex;
      justify-content: center;
      padding: 24px 16px 48px;
    }

    .app {
      width: min(1040px, 100%);
      display: grid;
      gap: 20px;
    }

    nav {
      display: flex;
      gap: 14px;
    }

    nav a {
      color: var(--muted);
      text-decoration: none;
      font-weight: 600;
    }

    nav a.active {
      color: var(--accent);
    }

    .card {
      background: var(--card);
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    header.card {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    h1 {
      color: var(--accent);
      margin: 0;
      font-size: 1.9rem;
    }

    h2, h3 {
      margin: 0 0 12px;
    }

    .identity {
      display: grid;
      justify-items: end;
      font-size: 0.9rem;
    }

    .columns {
      display: grid;
      grid-template-columns: minmax(0, 1fr) 320px;
      gap: 20px;
    }

    .side {
      display: grid;
      gap: 16px;
      align-content: start;
    }

    .add-form {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-bottom: 16px;
    }

    .add-form input[type="text"] {
      flex: 1;
      min-width: 160px;
    }

    input, select {
      border: 1px solid #d9dce3;
      border-radius: 8px;
      padding: 8px 10px;
      font: inherit;
    }

    button {
      border: none;
      border-radius: 8px;
      padding: 8px 14px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: #fff;
    }

    button:hover {
      background: var(--accent-dark);
    }

    button:disabled {
      background: #e4e6eb;
      color: var(--muted);
      cursor: not-allowed;
    }

    button.pill {
      border-radius: 999px;
      padding: 4px 12px;
      font-size: 0.8rem;
    }

    button.danger {
      background: #fde8e8;
      color: #e04848;
      border-radius: 999px;
      padding: 4px 10px;
    }

    .task, .note {
      display: flex;
      justify-content: space-between;
      align-items: center;
      border: 1px solid #eceef2;
      border-radius: 10px;
      padding: 10px 14px;
      margin-bottom: 8px;
      background: #fafbfc;
    }

    .task.done {
      background: #effaf2;
      color: var(--muted);
      text-decoration: line-through;
    }

    .task-body {
      display: grid;
      gap: 4px;
    }

    .meta {
      display: flex;
      gap: 14px;
      font-size: 0.75rem;
      color: var(--muted);
    }

    .actions {
      display: flex;
      gap: 6px;
    }

    .priority-high { color: #e04848; }
    .priority-medium { color: #d9a400; }
    .priority-low { color: #2fa55a; }

    .bar {
      width: 100%;
      height: 8px;
      background: #e4e6eb;
      border-radius: 6px;
      margin: 8px 0;
    }

    .bar span {
      display: block;
      height: 100%;
      background: var(--accent);
      border-radius: 6px;
    }

    .reward {
      display: flex;
      align-items: center;
      gap: 10px;
      background: #fafbfc;
      border-radius: 10px;
      padding: 8px 10px;
      margin-bottom: 8px;
    }

    .reward-body {
      flex: 1;
    }

    .emoji {
      font-size: 1.5rem;
    }

    ul {
      margin: 0;
      padding-left: 18px;
    }

    ul.history {
      list-style: none;
      padding: 0;
      display: grid;
      gap: 4px;
    }

    ul.classes {
      list-style: none;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .class {
      display: grid;
      gap: 2px;
      border-left: 3px solid var(--accent);
      padding-left: 10px;
    }

    .class-name {
      font-weight: 600;
    }

    .clock {
      display: grid;
      justify-items: center;
      gap: 4px;
    }

    .clock .time {
      font-family: ui-monospace, monospace;
      font-size: 2rem;
    }

    .gain { color: #2fa55a; }
    .loss { color: #e04848; }
    .small { font-size: 0.8rem; }
    .muted { color: var(--muted); }

    .empty {
      color: var(--muted);
      text-align: center;
      padding: 24px 0;
    }

    .empty.small {
      text-align: left;
      padding: 0;
    }

    @media (max-width: 860px) {
      .columns {
        grid-template-columns: 1fr;
      }
    }
"#;

const TODO_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Gamified To-Do</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <nav>{{NAV}}</nav>
    <header class="card">
      <h1>Gamified To-Do</h1>
      <div class="identity">
        <span>{{USER_ID}}</span>
        <span>Level: <b>{{LEVEL}}</b> | Tasks Completed: <b>{{COMPLETED}}</b></span>
        <span class="small muted">Your ID: {{DISPLAY_ID}}</span>
      </div>
    </header>

    <div class="columns">
      <section class="card">
        <h2>Your Tasks</h2>
        <form class="add-form" method="post" action="/tasks">
          <input type="text" name="text" placeholder="Add a new task..." autofocus />
          <input type="date" name="due" />
          <select name="priority">{{PRIORITY_OPTIONS}}</select>
          <input type="hidden" name="return_to" value="/" />
          <button type="submit">+ Add Task</button>
        </form>
        {{TASKS}}
      </section>

      <aside class="side">
        <section class="card">
          <h3>Progress</h3>
          <div><b>Level {{LEVEL}}</b> <span class="small muted">{{XP_IN_LEVEL}} / {{LEVEL_XP}} XP</span></div>
          <div class="bar"><span style="width: {{PERCENT}}%"></span></div>
          <div class="small muted">{{XP}} XP total. Keep completing tasks to reach Level {{NEXT_LEVEL}}!</div>
        </section>

        <section class="card">
          <h3>Upcoming Tasks ({{UPCOMING_COUNT}})</h3>
          {{UPCOMING}}
        </section>

        <section class="card">
          <h3>XP History</h3>
          {{HISTORY}}
        </section>

        <section class="card">
          <h3>Rewards</h3>
          {{REWARDS}}
        </section>
      </aside>
    </div>
  </main>
</body>
</html>
"#;

const HOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Home</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <nav>{{NAV}}</nav>
    <header class="card">
      <h1>Home</h1>
      <div class="identity"><span>{{USER_ID}}</span></div>
    </header>

    <div class="columns">
      <div class="side">
        <section class="card">
          <h2>Class Schedule</h2>
          <ul class="classes">{{CLASSES}}</ul>
        </section>

        <section class="card">
          <h2>Quick Tasks</h2>
          <form class="add-form" method="post" action="/tasks">
            <input type="text" name="text" placeholder="Add a quick task..." />
            <input type="hidden" name="return_to" value="/home" />
            <button type="submit">Add</button>
          </form>
          {{TASKS}}
        </section>
      </div>

      <aside class="side">
        <section class="card clock">
          <span><b>Time + Date</b></span>
          <span class="time" id="clock-time">{{TIME}}</span>
          <span class="small muted" id="clock-date">{{DATE}}</span>
        </section>

        <section class="card">
          <h3>Quick Notes</h3>
          <form class="add-form" method="post" action="/notes">
            <input type="text" name="text" placeholder="Jot something down..." />
            <input type="hidden" name="return_to" value="/home" />
            <button type="submit">Save</button>
          </form>
          {{NOTES}}
        </section>
      </aside>
    </div>
  </main>

  <script>
    const timeEl = document.getElementById('clock-time');
    const dateEl = document.getElementById('clock-date');

    const tick = () => {
      const now = new Date();
      timeEl.textContent = now.toLocaleTimeString([], { hour: '2-digit', minute: '2-digit' });
      dateEl.textContent = now.toLocaleDateString();
    };

    setInterval(tick, 30 * 1000);
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::identity::Identity;
    use crate::stats::build_snapshot;
    use chrono::NaiveDate;

    fn snapshot_with(board: &Board) -> BoardSnapshot {
        build_snapshot(&Identity::new("User-abc12345".to_string()), board)
    }

    #[test]
    fn todo_page_escapes_task_text() {
        let mut board = Board::new();
        board.add_task("<script>alert(1)</script>", None, Priority::High);
        let html = render_todo(&snapshot_with(&board));

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn todo_page_disables_unaffordable_rewards() {
        let html = render_todo(&snapshot_with(&Board::new()));
        assert_eq!(html.matches("Redeem</button>").count(), 5);
        assert_eq!(html.matches(" disabled>Redeem").count(), 5);
        assert!(html.contains("No XP history yet."));
        assert!(html.contains("Level: <b>1</b>"));
    }

    #[test]
    fn completed_tasks_lose_done_button() {
        let mut board = Board::new();
        let task = board.add_task("Water plants", None, Priority::Low).unwrap();
        board.complete_task(&task.id);
        let html = render_todo(&snapshot_with(&board));

        assert!(html.contains("task done"));
        assert!(!html.contains(&format!("/tasks/{}/complete", task.id)));
        assert!(html.contains("Water plants <span class=\"gain\">+20 XP</span>"));
    }

    #[test]
    fn task_rows_show_due_date_and_priority_on_todo_page_only() {
        let mut board = Board::new();
        board.add_task("File taxes", NaiveDate::from_ymd_opt(2026, 4, 15), Priority::High);
        let snapshot = snapshot_with(&board);

        let todo = task_rows(&snapshot.tasks, "/", true);
        assert!(todo.contains("<span>Due: 2026-04-15</span>"));
        assert!(todo.contains("<span class=\"priority-high\">High</span>"));
        assert!(todo.contains("value=\"/\""));

        let home = task_rows(&snapshot.tasks, "/home", false);
        assert!(home.contains("File taxes"));
        assert!(!home.contains("Due:"));
        assert!(home.contains("value=\"/home\""));
    }

    #[test]
    fn home_page_shows_schedule_notes_and_clock() {
        let mut board = Board::new();
        board.add_note("Bring lab coat");
        let now = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let html = render_home(&snapshot_with(&board), now);

        assert!(html.contains("Calculus II"));
        assert!(html.contains("Bring lab coat"));
        assert!(html.contains(">09:05<"));
        assert!(html.contains("Friday, October 16, 2026"));
        assert!(!html.contains("{{"));
    }
}
