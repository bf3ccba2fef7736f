use staffbook::Mappable;
use staffbook::mapping::Mappable as _;

#[derive(Mappable)]
struct Profile {
    #[mapper(rename = "IdProfile")]
    id: i32,
    #[mapper(skip)]
    cache: Vec<u8>,
    #[mapper(write_only)]
    password: String,
    r#type: String,
}

fn main() {
    let fields = Profile::fields();
    let names: Vec<&str> = fields.iter().map(|field| field.name).collect();
    assert_eq!(names, vec!["IdProfile", "password", "type"]);
    assert!(!fields[1].is_readable());
    assert!(fields[1].is_writable());

    let profile = Profile {
        id: 1,
        cache: Vec::new(),
        password: String::new(),
        r#type: String::new(),
    };
    let _ = (profile.id, profile.cache, profile.password, profile.r#type);
}
