table! {
    place (rowid) {
        rowid -> BigInt,
        address -> Text,
        coordinates -> Nullable<Text>,
        updated_at -> BigInt,
    }
}

table! {
    restaurant (id) {
        id -> BigInt,
        name -> Text,
        address -> Text,
        contact_phone -> Text,
        coordinates -> Nullable<Text>,
    }
}

table! {
    product (id) {
        id -> BigInt,
        name -> Text,
    }
}

table! {
    restaurant_menu_item (restaurant_id, product_id) {
        restaurant_id -> BigInt,
        product_id -> BigInt,
        availability -> SmallInt,
    }
}

joinable!(restaurant_menu_item -> restaurant (restaurant_id));
joinable!(restaurant_menu_item -> product (product_id));

table! {
    orders (id) {
        id -> BigInt,
        status -> Text,
        payment_method -> Text,
        firstname -> Text,
        lastname -> Text,
        phonenumber -> Text,
        address -> Text,
        coordinates -> Nullable<Text>,
        comment -> Text,
        created_at -> BigInt,
        called_at -> Nullable<BigInt>,
        delivered_at -> Nullable<BigInt>,
        cooking_restaurant_id -> Nullable<BigInt>,
    }
}

table! {
    order_item (order_id, product_id) {
        order_id -> BigInt,
        product_id -> BigInt,
        quantity -> BigInt,
    }
}

joinable!(order_item -> orders (order_id));
joinable!(order_item -> product (product_id));

allow_tables_to_appear_in_same_query!(
    place,
    restaurant,
    product,
    restaurant_menu_item,
    orders,
    order_item,
);
