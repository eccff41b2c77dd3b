// Example: a contact form session from first keystroke to payload.
use folio_contact::{ContactForm, Field};

fn main() {
    let mut form = ContactForm::new();
    form.set(Field::Email, "not a valid email");
    form.blur(Field::Email);
    println!(
        "email={:?} label={:?} can_submit={}",
        form.status(Field::Email),
        form.contact_label(),
        form.can_submit()
    );

    match form.attempt_submit() {
        Ok(_) => println!("sent"),
        Err(err) => println!("blocked: {err}"),
    }

    form.set(Field::Name, "Ada");
    form.set(Field::Email, "ada@example.com");
    form.set(Field::Phone, "12345");
    form.blur(Field::Phone);
    form.set(Field::Message, "Hello!");
    println!(
        "phone={:?} preferred={:?}",
        form.status(Field::Phone),
        form.preferred_contact()
    );

    if let Ok(sub) = form.attempt_submit() {
        for (key, value) in sub.fields() {
            println!("{key}={value}");
        }
    }
}
