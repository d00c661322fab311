//! Share-intent links for handing the list to a mail client, chat app or SMS.

use crate::TodoList;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped, matching
/// what browsers' `encodeURIComponent` produces.
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

const EMAIL_SUBJECT: &str = "My To-Do List";
const TELEGRAM_URL_LABEL: &str = "Shared To-Do List";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareMethod {
    Email,
    WhatsApp,
    Telegram,
    Sms,
}

impl ShareMethod {
    pub const ALL: [ShareMethod; 4] = [
        ShareMethod::Email,
        ShareMethod::WhatsApp,
        ShareMethod::Telegram,
        ShareMethod::Sms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShareMethod::Email => "Email",
            ShareMethod::WhatsApp => "WhatsApp",
            ShareMethod::Telegram => "Telegram",
            ShareMethod::Sms => "iMessage",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShareMethod::Email => "email",
            ShareMethod::WhatsApp => "whatsapp",
            ShareMethod::Telegram => "telegram",
            ShareMethod::Sms => "sms",
        }
    }
}

impl fmt::Display for ShareMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShareMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" | "mail" => Ok(ShareMethod::Email),
            "whatsapp" => Ok(ShareMethod::WhatsApp),
            "telegram" => Ok(ShareMethod::Telegram),
            "sms" | "imessage" => Ok(ShareMethod::Sms),
            other => Err(format!("Unknown share method: {}", other)),
        }
    }
}

/// Plain-text rendition: the title and a blank line when there is a title,
/// then one `- text` line per item.
pub fn share_message(list: &TodoList) -> String {
    let lines = list
        .items
        .iter()
        .map(|item| format!("- {}", item.text))
        .collect::<Vec<_>>()
        .join("\n");

    if list.title.is_empty() {
        lines
    } else {
        format!("{}\n\n{}", list.title, lines)
    }
}

fn encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

pub fn share_link(method: ShareMethod, list: &TodoList) -> String {
    let message = share_message(list);
    match method {
        ShareMethod::Email => {
            // Mail clients expect CRLF line breaks in the body.
            let body = encode(&message).replace("%0A", "%0D%0A");
            format!("mailto:?subject={}&body={}", encode(EMAIL_SUBJECT), body)
        }
        ShareMethod::WhatsApp => format!("https://wa.me/?text={}", encode(&message)),
        ShareMethod::Telegram => format!(
            "https://t.me/share/url?url={}&text={}",
            encode(TELEGRAM_URL_LABEL),
            encode(&message)
        ),
        ShareMethod::Sms => format!("sms:&body={}", encode(&message)),
    }
}
