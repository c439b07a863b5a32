///////////////////////////////////////////////////////////////////////
// Establishments
///////////////////////////////////////////////////////////////////////

table! {
    establishment (rowid) {
        rowid -> BigInt,
        id -> Text,
        external_id -> Nullable<Text>,
        name -> Text,
        lat -> Double,
        lng -> Double,
        classification -> Text,
        address -> Nullable<Text>,
        phone -> Nullable<Text>,
        website -> Nullable<Text>,
        description -> Nullable<Text>,
        price_level -> Nullable<SmallInt>,
        rating -> Nullable<Double>,
        // JSON array of opening periods
        opening_hours -> Nullable<Text>,
        open_now -> Nullable<Bool>,
        photo_reference -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        username -> Text,
        token -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Wait times
///////////////////////////////////////////////////////////////////////

table! {
    wait_time_sample (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        created_at -> BigInt,
        estimated_wait -> BigInt,
    }
}

joinable!(wait_time_sample -> establishment (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Favorites
///////////////////////////////////////////////////////////////////////

table! {
    favorite (rowid) {
        rowid -> BigInt,
        user_rowid -> BigInt,
        establishment_rowid -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(favorite -> users (user_rowid));
joinable!(favorite -> establishment (establishment_rowid));

allow_tables_to_appear_in_same_query!(establishment, users, wait_time_sample, favorite);
