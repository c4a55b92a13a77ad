use log::debug;

use crate::view::ListView;

pub const DATA_PRINCIPLES: [&str; 4] = [
    "Accuracy: Verifying data against source documents.",
    "Completeness: Ensuring all required fields are filled to avoid missing information.",
    "Timeliness: Data must be submitted and analyzed promptly to inform immediate action.",
    "Actionability: Transforming data into insights that lead to better health outcomes.",
];

/// Appends every principle to the list, in order. Nothing happens without a list.
pub fn render_principles(list: Option<&mut dyn ListView>) {
    let Some(list) = list else {
        debug!("No principles list to render into");
        return;
    };
    DATA_PRINCIPLES
        .iter()
        .for_each(|principle| list.append_item(principle));
}
