use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyInput,
    DuplicateItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Alert(Notice),
    ConfirmRemove(Uuid),
}

impl Notice {
    pub fn message_key(self) -> &'static str {
        match self {
            Notice::EmptyInput => "alert-empty-input",
            Notice::DuplicateItem => "alert-duplicate-item",
        }
    }
}
