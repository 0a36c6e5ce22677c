//! Request bodies shared by organizations and projects

use serde::Serialize;

/// Add a user to an organization or project
#[derive(Serialize, Debug)]
pub struct AddMemberRequest<'a> {
    pub user_id: &'a str,
    pub role: &'a str,
}

#[derive(Serialize, Debug)]
pub struct ChangeRoleRequest<'a> {
    pub role: &'a str,
}

/// Invite someone by email
#[derive(Serialize, Debug)]
pub struct InvitationRequest<'a> {
    pub email: &'a str,
    pub role: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_member_request_shape() {
        let req = AddMemberRequest {
            user_id: "u-1",
            role: "admin",
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"user_id": "u-1", "role": "admin"})
        );
    }
}
