//! HTML for the home and quiz screens.
//!
//! Pure string builders so they can be checked natively; the browser shell assigns
//! the result to the root element's `innerHTML`. Interactive elements carry
//! `data-action` (and optionally `data-value`) which the delegated click listener
//! decodes with [`crate::Action::parse`]. All interpolated text is either numeric or
//! one of the static [`WORLDS`] strings, so no escaping is performed.

use std::fmt::Write;

use crate::WORLDS;
use crate::progress::ProgressState;
use crate::quiz::{Feedback, QuizSession};

const PILL_STYLE: &str = "display:inline-block; margin-right:10px; padding:6px 14px; border-radius:16px; background:rgba(255,255,255,0.7); font-family:sans-serif;";
const DARK_BUTTON_STYLE: &str = "padding:12px 20px; border:none; border-radius:16px; background:#0f172a; color:#fff; font-weight:800; cursor:pointer;";
const CHOICE_STYLE: &str = "padding:20px 24px; border:none; border-radius:24px; background:#fff; font-size:22px; font-weight:800; text-align:left; cursor:pointer;";

fn stat_pill(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = write!(
        out,
        "<div class=\"zm-pill\" style=\"{PILL_STYLE}\"><div style=\"font-size:11px; font-weight:700; text-transform:uppercase;\">{label}</div><div style=\"font-weight:800;\">{value}</div></div>"
    );
}

pub fn render_home(progress: &ProgressState) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<div class=\"zm-home\" style=\"max-width:1100px; margin:0 auto; padding:40px 20px; font-family:sans-serif;\">");
    out.push_str("<div style=\"font-weight:800;\">🎮 ZotorMath</div>");
    out.push_str("<h1>Make math feel like play.</h1>");
    out.push_str("<p>Short, colorful games that build confidence fast. Earn coins, keep streaks, and unlock new worlds.</p>");

    out.push_str("<div class=\"zm-stats\">");
    stat_pill(&mut out, "Coins", progress.coins);
    stat_pill(&mut out, "Level", progress.level);
    stat_pill(&mut out, "Streak", progress.streak);
    out.push_str("</div>");

    let _ = write!(
        out,
        "<p><button data-action=\"start\" style=\"{DARK_BUTTON_STYLE}\">Start Playing</button></p>"
    );

    out.push_str("<div class=\"zm-worlds\" style=\"display:grid; grid-template-columns:repeat(auto-fill,minmax(220px,1fr)); gap:20px; margin-top:32px;\">");
    for world in WORLDS {
        let _ = write!(
            out,
            "<button class=\"zm-world\" data-action=\"world\" data-value=\"{id}\" style=\"padding:20px; border:none; border-radius:24px; background:rgba(255,255,255,0.75); text-align:left; cursor:pointer;{dim}\"><div style=\"font-size:28px;\">{emoji}</div><div style=\"font-size:11px; font-weight:800;\">{ages}</div><div style=\"font-size:18px; font-weight:800; margin-top:12px;\">{title}</div><div>{blurb}</div><div style=\"margin-top:16px; font-weight:800;\">{cta}</div></button>",
            id = world.id,
            emoji = world.emoji,
            ages = world.ages,
            title = world.title,
            blurb = world.blurb,
            dim = if world.playable { "" } else { " opacity:0.6;" },
            cta = if world.playable { "Play →" } else { "Coming soon" },
        );
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        "<div class=\"zm-daily\" style=\"margin-top:32px; padding:24px; border-radius:24px; background:rgba(255,255,255,0.7);\"><div style=\"font-weight:800;\">Daily challenge</div><div>Complete 5 quick questions to keep your streak and earn bonus coins.</div><button data-action=\"daily\" style=\"{DARK_BUTTON_STYLE} margin-top:12px;\">Start Daily Challenge</button></div>"
    );
    out.push_str("</div>");
    out
}

fn feedback_badge(feedback: Option<Feedback>) -> &'static str {
    match feedback {
        Some(Feedback::Correct) => "✅",
        Some(Feedback::Wrong) => "❌",
        None => "🎯",
    }
}

pub fn render_quiz(progress: &ProgressState, session: &QuizSession) -> String {
    let question = session.question();
    let mut out = String::with_capacity(2048);
    out.push_str("<div class=\"zm-quiz\" style=\"max-width:900px; margin:0 auto; padding:32px 20px; font-family:sans-serif;\">");
    let _ = write!(
        out,
        "<div style=\"display:flex; justify-content:space-between; align-items:center;\"><button data-action=\"back\" style=\"padding:8px 16px; border:none; border-radius:16px; background:rgba(255,255,255,0.8); font-weight:800; cursor:pointer;\">← Back</button><div>"
    );
    stat_pill(&mut out, "Coins", progress.coins);
    stat_pill(&mut out, "Level", progress.level);
    stat_pill(&mut out, "Streak", progress.streak);
    out.push_str("</div></div>");

    let _ = write!(
        out,
        "<div style=\"margin-top:40px; padding:32px; border-radius:24px; background:rgba(255,255,255,0.75);\"><div style=\"display:flex; justify-content:space-between; align-items:center;\"><div><div style=\"font-size:13px; font-weight:800;\">Addition Town • Tap the Answer</div><h2 class=\"zm-prompt\">{prompt}</h2></div><div class=\"zm-feedback\" style=\"font-size:40px;\">{badge}</div></div>",
        prompt = question.prompt(),
        badge = feedback_badge(session.feedback()),
    );
    out.push_str("<div class=\"zm-choices\" style=\"display:grid; grid-template-columns:1fr 1fr; gap:16px; margin-top:32px;\">");
    for choice in question.choices {
        let _ = write!(
            out,
            "<button class=\"zm-choice\" data-action=\"pick\" data-value=\"{choice}\" style=\"{CHOICE_STYLE}\">{choice}</button>"
        );
    }
    out.push_str("</div><div style=\"margin-top:24px; font-size:14px;\">Tip: Build a streak to level up and earn more coins.</div></div></div>");
    out
}
