use stone_eng_frontend::contact::ContactForm;

use crate::mail::mailer::OutgoingMail;

const SITE_NAME: &str = "Stone.Eng";

/// Forwards the inquiry to the site owner.
pub fn owner_notification(form: &ContactForm, owner: &str) -> OutgoingMail {
    let sender = if form.name.trim().is_empty() {
        "(お名前なし)"
    } else {
        form.name.trim()
    };

    OutgoingMail {
        to: owner.to_string(),
        subject: format!("【{}】お問い合わせ: {}", SITE_NAME, sender),
        text: format!(
            "ウェブサイトからお問い合わせがありました。\n\n\
             お名前: {}\n\
             メールアドレス: {}\n\n\
             {}\n",
            form.name, form.email, form.msg
        ),
    }
}

/// Confirmation for the visitor. None when they left the address blank.
/// The body never echoes anything the visitor typed.
pub fn auto_reply(form: &ContactForm) -> Option<OutgoingMail> {
    let to = form.email.trim();
    if to.is_empty() {
        return None;
    }

    Some(OutgoingMail {
        to: to.to_string(),
        subject: format!("【{}】お問い合わせありがとうございます", SITE_NAME),
        text: format!(
            "{}へのお問い合わせありがとうございます。\n\
             内容を確認のうえ、担当者より改めてご連絡いたします。\n\n\
             お心当たりのない場合は、このメールを破棄してください。\n\
             このメールは送信専用アドレスから自動で送信しています。\n",
            SITE_NAME
        ),
    })
}
