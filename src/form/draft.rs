/// Fields of the contact form, in display and focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "example@mail.com",
            Field::Subject => "What is this regarding?",
            Field::Message => "Tell me about your project, question, or just say hi...",
        }
    }

    /// Upper length bound shown next to the field, where one exists.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Field::Name => Some(50),
            Field::Email => None,
            Field::Subject => Some(100),
            Field::Message => Some(1000),
        }
    }
}

/// Raw values of the message being composed, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl MessageDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = MessageDraft::default();
    }
}
