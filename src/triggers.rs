//! Static catalog of known trigger kinds
//!
//! The table maps trigger type codes to display labels. It is kept sorted by
//! kind so lookups can binary search and iteration is numeric.

use crate::core::TriggerKind;

const TRIGGER_CATALOG: &[(TriggerKind, &str)] = &[
    (101, "Follow"),
    (102, "Cheer"),
    (103, "Subscription"),
    (104, "Resubscription"),
    (105, "Gift Subscription"),
    (106, "Gift Bomb"),
    (107, "Raid"),
    (108, "Hype Train Start"),
    (110, "Hype Train Level Up"),
    (111, "Hype Train End"),
    (112, "Reward Redemption"),
    (116, "Community Goal Contribution"),
    (118, "Stream Update"),
    (120, "First Words"),
    (121, "Sub Counter Rollover"),
    (127, "Poll Completed"),
    (130, "Prediction Completed"),
    (133, "Chat Message"),
    (135, "Chat Message Deleted"),
    (136, "User Timed Out"),
    (137, "User Banned (T)"),
    (139, "Ad Run"),
    (154, "Stream Online"),
    (155, "Stream Offline"),
    (158, "Raid Start"),
    (159, "Raid Send"),
    (161, "Poll Terminated"),
    (186, "Upcoming Ad"),
    (189, "VIP Added"),
    (190, "VIP Removed"),
    (401, "Command Triggered"),
    (463, "AutoMod Message Held"),
    (474, "Shared Chat Session Begin"),
    (476, "Shared Chat Session End"),
    (477, "Prime Paid Upgrade"),
    (478, "Pay It Forward"),
    (479, "Gift Paid Upgrade"),
    (501, "File Changed"),
    (601, "Quote Added"),
    (602, "Show Quote"),
    (701, "Timed Actions"),
    (702, "Test"),
    (706, "Streamer.Bot Started"),
    (709, "Global Variable Updated"),
    (4001, "Broadcast Started"),
    (4002, "Broadcast Ended"),
    (4003, "Message (YT)"),
    (4005, "User Banned (YT)"),
    (4016, "First Words (YT)"),
    (4018, "New Subscriber"),
    (14003, "OBS Event"),
    (14004, "OBS Scene Changed"),
    (29003, "Remote Instance Trigger"),
    (32004, "Group User Added"),
    (32005, "Group User Removed"),
];

/// Display label for a trigger kind, if the catalog knows it
pub fn trigger_label(kind: TriggerKind) -> Option<&'static str> {
    TRIGGER_CATALOG
        .binary_search_by_key(&kind, |&(k, _)| k)
        .ok()
        .map(|idx| TRIGGER_CATALOG[idx].1)
}

/// Whether the catalog knows a trigger kind
pub fn is_known_trigger(kind: TriggerKind) -> bool {
    trigger_label(kind).is_some()
}
