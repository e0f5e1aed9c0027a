use crate::models::{Contact, ContactId, Presence};

/// Roster id of the local user.
pub const LOCAL_USER_ID: &str = "1";

/// Roster id of the contact that answers every message.
pub const REPLYING_CONTACT_ID: &str = "2";

/// The fixed set of contacts shown in the sidebar.
pub fn default_contacts() -> Vec<Contact> {
    vec![
        Contact::new(
            LOCAL_USER_ID,
            "You",
            Presence::Online,
            "https://randomuser.me/api/portraits/men/1.jpg",
        ),
        Contact::new(
            REPLYING_CONTACT_ID,
            "Sarah Parker",
            Presence::Online,
            "https://randomuser.me/api/portraits/women/1.jpg",
        )
        .with_status("Available"),
        Contact::new(
            "3",
            "Mike Chen",
            Presence::Away,
            "https://randomuser.me/api/portraits/men/2.jpg",
        )
        .with_status("In a meeting"),
        Contact::new(
            "4",
            "Emma Wilson",
            Presence::Offline,
            "https://randomuser.me/api/portraits/women/2.jpg",
        ),
        Contact::new(
            "5",
            "Alex Turner",
            Presence::Online,
            "https://randomuser.me/api/portraits/men/3.jpg",
        )
        .with_status("Working"),
    ]
}

pub fn replying_contact_id() -> ContactId {
    ContactId::new(REPLYING_CONTACT_ID)
}
