use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataItem {
    pub id: u32,
    pub value: &'static str,
    pub category: &'static str,
}

/// The fixed listing served by `GET /api/data`, in response order.
pub const SAMPLE_ITEMS: [DataItem; 3] = [
    DataItem {
        id: 1,
        value: "Sample data 1",
        category: "A",
    },
    DataItem {
        id: 2,
        value: "Sample data 2",
        category: "B",
    },
    DataItem {
        id: 3,
        value: "Sample data 3",
        category: "A",
    },
];
