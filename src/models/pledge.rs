use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pledge {
    pub name: String,
    pub skill: String,
    pub amount: String, // display string, e.g. "$50"
    pub reward: String,
    pub reviews: Vec<Review>,
    pub updates: Vec<Update>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub rating: u8, // 1..=5
    pub review: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub text: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePledge {
    pub name: String,
    pub skill: String,
    pub amount: String,
    pub reward: String,
}

#[derive(Debug, Deserialize)]
pub struct SupportPledge {
    pub investor_name: String,
    pub pledge_name: String,
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub pledge_name: String,
    pub rating: u8,
    pub review: String,
}

impl Pledge {
    pub fn new(payload: CreatePledge) -> Self {
        Pledge {
            name: payload.name,
            skill: payload.skill,
            amount: payload.amount,
            reward: payload.reward,
            reviews: Vec::new(),
            updates: Vec::new(),
        }
    }
}
