use crate::proto;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub country: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub postal_code: String,
}

impl AddressRecord {
    /// The address attached to every generated user.
    pub fn fixed() -> Self {
        Self {
            country: "Spain".to_owned(),
            city: "Madrid".to_owned(),
            state: "Madrid".to_owned(),
            address: "Avenida Ciudad de Barcelona 23, 4B".to_owned(),
            postal_code: "28007".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(serialize_with = "serialize_iso_date")]
    pub birth_date: DateTime<Utc>,
    pub address: AddressRecord,
}

/// Users submitted together in one call, serialized as `{"users": [...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BatchRequest {
    pub users: Vec<UserRecord>,
}

impl BatchRequest {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn to_proto(&self) -> proto::UserBulkLoadRequest {
        proto::UserBulkLoadRequest::from(self)
    }
}

fn serialize_iso_date<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.date_naive())
}

impl From<&AddressRecord> for proto::UserAddress {
    fn from(address: &AddressRecord) -> Self {
        proto::UserAddress {
            country: address.country.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            address: address.address.clone(),
            postal_code: address.postal_code.clone(),
        }
    }
}

impl From<&UserRecord> for proto::User {
    fn from(user: &UserRecord) -> Self {
        proto::User {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            // Whole seconds only, the nanosecond part is not sent.
            birth_date: Some(prost_types::Timestamp {
                seconds: user.birth_date.timestamp(),
                nanos: 0,
            }),
            address: Some(proto::UserAddress::from(&user.address)),
        }
    }
}

impl From<&BatchRequest> for proto::UserBulkLoadRequest {
    fn from(batch: &BatchRequest) -> Self {
        proto::UserBulkLoadRequest {
            users: batch.users.iter().map(proto::User::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use prost::Message;

    fn user(suffix: &str) -> UserRecord {
        UserRecord {
            username: format!("someUsername{suffix}"),
            first_name: format!("name{suffix}"),
            last_name: format!("lastName{suffix}"),
            email: format!("email{suffix}@email.com"),
            phone: format!("+34666{suffix}"),
            birth_date: Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 5).unwrap(),
            address: AddressRecord::fixed(),
        }
    }

    #[test]
    fn json_should_use_camel_case_fields_and_iso_date() {
        let batch = BatchRequest::new(vec![user("0.5")]);
        let json: serde_json::Value = serde_json::from_slice(&batch.to_json().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "users": [{
                    "username": "someUsername0.5",
                    "firstName": "name0.5",
                    "lastName": "lastName0.5",
                    "email": "email0.5@email.com",
                    "phone": "+346660.5",
                    "birthDate": "2024-03-07",
                    "address": {
                        "country": "Spain",
                        "city": "Madrid",
                        "state": "Madrid",
                        "address": "Avenida Ciudad de Barcelona 23, 4B",
                        "postalCode": "28007"
                    }
                }]
            })
        );
    }

    #[test]
    fn empty_batch_should_serialize_to_valid_empty_documents() {
        let batch = BatchRequest::default();
        assert_eq!(batch.to_json().unwrap(), br#"{"users":[]}"#);

        let request = batch.to_proto();
        assert!(request.users.is_empty());
        assert_eq!(request.encoded_len(), 0);
    }

    #[test]
    fn proto_conversion_should_map_fields_one_to_one() {
        let record = user("0.25");
        let batch = BatchRequest::new(vec![record.clone()]);
        let request = batch.to_proto();

        assert_eq!(request.users.len(), 1);
        let converted = &request.users[0];
        assert_eq!(converted.username, record.username);
        assert_eq!(converted.first_name, record.first_name);
        assert_eq!(converted.last_name, record.last_name);
        assert_eq!(converted.email, record.email);
        assert_eq!(converted.phone, record.phone);
        assert_eq!(
            converted.birth_date,
            Some(prost_types::Timestamp {
                seconds: record.birth_date.timestamp(),
                nanos: 0,
            })
        );
        let address = converted.address.as_ref().unwrap();
        assert_eq!(address.country, "Spain");
        assert_eq!(address.postal_code, "28007");
    }

    #[test]
    fn proto_conversion_should_preserve_order() {
        let batch = BatchRequest::new(vec![user("1"), user("2"), user("3")]);
        let usernames = batch
            .to_proto()
            .users
            .into_iter()
            .map(|user| user.username)
            .collect::<Vec<_>>();
        assert_eq!(
            usernames,
            vec!["someUsername1", "someUsername2", "someUsername3"]
        );
    }
}
