//! Static corpora used across harnesses.
//!
//! Car lines mirror what people actually type into the "vehicles" box of the
//! application: numbered lists, role prefixes, plates before or after the
//! name, spaced plates and region suffixes.

/// Form id and field ids of the first built-in form.
pub const CENTRAL_FORM: &str = "5e8b1f3a9c2d4e0017a1c001";
/// Form id of the second built-in form (different field ids).
pub const NORTH_FORM: &str = "5e8b1f3a9c2d4e0017a1c002";

/// `(line, plate, [surname, name, patronymic])` for lines that must yield a
/// valid car.
pub const CAR_LINES_VALID: &[(&str, &str, [&str; 3])] = &[
    (
        "1. Иванов Иван Иванович - А123ВС77",
        "А123ВС77",
        ["Иванов", "Иван", "Иванович"],
    ),
    (
        "2. Водитель - Петров Пётр Петрович В 456 ОР 199",
        "В456ОР199",
        ["Петров", "Пётр", "Петрович"],
    ),
    (
        "Е777КХ750 RUS Сидорова Анна Павловна",
        "Е777КХ750RUS",
        ["Сидорова", "Анна", "Павловна"],
    ),
    (
        "м 001 мм 50 Кузнецов Андрей Васильевич",
        "М001ММ50",
        ["Кузнецов", "Андрей", "Васильевич"],
    ),
    (
        "Смирнов Олег Игоревич, Т 345 УК 78 rus",
        "Т345УК78RUS",
        ["Смирнов", "Олег", "Игоревич,"],
    ),
];

/// Lines with a plate but fewer than three name tokens.
pub const CAR_LINES_NO_DRIVER: &[(&str, &str)] = &[
    ("А123ВС77 Иванов Иван", "А123ВС77"),
    ("Газель А123ВС77 водитель -", "А123ВС77"),
    ("3. К 555 АА 777 — Волков", "К555АА777"),
];

/// Lines that never yield a car: too short, or no plate anywhere.
pub const CAR_LINES_DROPPED: &[&str] = &[
    "",
    "А123ВС77",
    "Иванов И.И.",
    "Иванов Иван Иванович, без машины",
    "Газель, госномер уточняется позже",
];

/// A well-formed two-block dump, as exported.
pub const DUMP_TWO_BLOCKS: &str = r#"/* 1 createdAt:2020-04-15T09:54:13.503Z */
{
	"_id" : ObjectId("5e96d7f5a1b2c3d4e5f60718"),
	"formId" : "5e8b1f3a9c2d4e0017a1c001",
	"data" : [
		{ "fid" : "1", "value" : [ "Розничная торговля\nпродуктами" ] },
		{ "fid" : "2", "value" : [ "ООО \"Ромашка\"" ] },
		{ "fid" : "3", "value" : [ "г. Москва\nул. Ленина, д. 1" ] },
		{ "fid" : "4", "value" : [ "7701 234 567" ] },
		{ "fid" : "5", "value" : [ "Иванов Иван Иванович" ] },
		{ "fid" : "6", "value" : [ "+7 (900) 000-00-00" ] },
		{ "fid" : "7", "value" : [ "info@romashka.ru" ] },
		{ "fid" : "8", "value" : [ "1. Петров Пётр Петрович - А123ВС77\n2. Сидоров Сидор - В456ОР199\nуточним позже" ] },
		{ "fid" : "9", "value" : [ "Согласен" ] },
		{ "fid" : "10", "value" : [ "Достоверность подтверждаю" ] },
		{ "fid" : "77", "value" : [ "поле без роли" ] }
	]
},

/* 2 createdAt:2020-04-15T10:01:02Z */
{
	"_id" : ObjectId("5e96d7f5a1b2c3d4e5f60719"),
	"formId" : "5e8b1f3a9c2d4e0017a1c002",
	"data" : [
		{ "fid" : "11", "value" : [ "ИП Сергеев" ] },
		{ "fid" : "12", "value" : [ "500100732259" ] },
		{ "fid" : "15", "value" : [ "Сергеев Сергей" ] },
		{ "fid" : "18", "value" : [ "К001ММ50 Сергеев Сергей Сергеевич" ] }
	]
},

"#;

/// Second block's body is not JSON even after repair.
pub const DUMP_BROKEN_SECOND_BLOCK: &str = r#"/* 1 createdAt:2020-04-15T09:54:13Z */
{
	"_id" : ObjectId("aaa"),
	"formId" : "5e8b1f3a9c2d4e0017a1c001",
	"data" : []
},

/* 2 createdAt:2020-04-15T09:55:00Z */
{
	"_id" : ObjectId("bbb"),
	"formId" : "5e8b1f3a9c2d4e0017a1c001",
	"data" : [ { "fid" : "5" "value" : [] } ]
},

"#;
