/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Built-in SWIFT MT field tables.
//!
//! Layouts follow the SWIFT MT standards release format notation. Party and
//! narrative fields are displayed verbatim; all other fields are rendered
//! component by component.

use crate::schema::ComponentKind::{
    Account, Amount, Bic, Code, Currency, Date, Number, Sign, Text, Time,
};
use crate::schema::{ComponentKind, FieldDef, LabelOverride, SlotCodes};

/// Option A party: `[/1!a][/34x$]4!a2!a2!c[3!c]`.
const PARTY_BIC: &[ComponentKind] = &[Code, Account, Bic, Bic, Bic, Bic];
/// Option B party: `[/1!a][/34x][$35x]`.
const PARTY_LOCATION: &[ComponentKind] = &[Code, Account, Text];
/// Option D party: `[/1!a][/34x$]4*35x`.
const PARTY_NAME: &[ComponentKind] = &[Code, Account, Text];
/// Customer with name and address: `[/34x$]4*35x`.
const CUSTOMER_NAME: &[ComponentKind] = &[Account, Text];
/// Customer with BIC: `[/34x$]4!a2!a2!c[3!c]`.
const CUSTOMER_BIC: &[ComponentKind] = &[Account, Bic, Bic, Bic, Bic];
/// Balance: `1!a6!n3!a15d`.
const BALANCE: &[ComponentKind] = &[Code, Date, Currency, Amount];
/// Currency and amount: `3!a15d`.
const CURRENCY_AMOUNT: &[ComponentKind] = &[Currency, Amount];

const PARTY_BIC_FORMAT: &str = "[/1!a][/34x$]4!a2!a2!c[3!c]";
const PARTY_LOCATION_FORMAT: &str = "[/1!a][/34x][$35x]";
const PARTY_NAME_FORMAT: &str = "[/1!a][/34x$]4*35x";
const CUSTOMER_NAME_FORMAT: &str = "[/34x$]4*35x";
const CUSTOMER_BIC_FORMAT: &str = "[/34x$]4!a2!a2!c[3!c]";
/// Statement line debit/credit mark, including reversals and expected entries.
const STATEMENT_MARKS: &[SlotCodes] = &[SlotCodes {
    slot: 2,
    codes: &["C", "D", "RC", "RD", "EC", "ED"],
}];

const BALANCE_FORMAT: &str = "1!a6!n3!a15d";
const CURRENCY_AMOUNT_FORMAT: &str = "3!a15d";

/// User header (block 3) tags.
pub static BLOCK3_FIELDS: &[FieldDef] = &[
    FieldDef::new("103", "Service Identifier", "3!a", &[Code]),
    FieldDef::new(
        "106",
        "Message Input Reference",
        "6!n12!c4!n6!n",
        &[Date, Code, Number, Number],
    ),
    FieldDef::new("108", "Message User Reference", "16x", &[Text]),
    FieldDef::new("111", "Service Type Identifier", "3!n", &[Number]),
    FieldDef::new("113", "Banking Priority", "4!x", &[Code]),
    FieldDef::new("115", "Addressee Information", "32x", &[Text]),
    FieldDef::new("119", "Validation Flag", "8c", &[Code]),
    FieldDef::new(
        "121",
        "Unique End-to-End Transaction Reference",
        "36!x",
        &[Text],
    ),
    FieldDef::new(
        "165",
        "Payment Release Information Receiver",
        "/3!c/[34x]",
        &[Code, Text],
    ),
    FieldDef::new(
        "423",
        "Balance Checkpoint Date and Time",
        "6!n6!n[2!n]",
        &[Date, Time, Number],
    ),
    FieldDef::new("424", "Related Reference", "16x", &[Text]),
    FieldDef::new(
        "433",
        "Sanctions Screening Information for the Receiver",
        "/3!a/[20x]",
        &[Code, Text],
    ),
    FieldDef::new(
        "434",
        "Payment Controls Information for Receiver",
        "/3!a/[20x]",
        &[Code, Text],
    ),
];

/// Text block (block 4) tags, including the system message tags of MT0xx.
pub static BLOCK4_FIELDS: &[FieldDef] = &[
    FieldDef::verbatim(
        "11R",
        "MT and Date of the Original Message - Received",
        "3!n$6!n[$4!n6!n]",
        &[Number, Date, Number, Number],
    ),
    FieldDef::verbatim(
        "11S",
        "MT and Date of the Original Message",
        "3!n$6!n[$4!n6!n]",
        &[Number, Date, Number, Number],
    ),
    FieldDef::new("12", "Sub-Message Type", "3!n", &[Number]),
    FieldDef::new(
        "13C",
        "Time Indication",
        "/8c/4!n1!x4!n",
        &[Code, Time, Sign, Number],
    ),
    FieldDef::new(
        "13D",
        "Date/Time Indication",
        "6!n4!n1!x4!n",
        &[Date, Time, Sign, Number],
    ),
    FieldDef::new("15A", "New Sequence", "", &[]),
    FieldDef::new("15B", "New Sequence", "", &[]),
    FieldDef::new("20", "Transaction Reference Number", "16x", &[Text]),
    FieldDef::new("21", "Related Reference", "16x", &[Text]),
    FieldDef::new("21R", "Customer Specified Reference", "16x", &[Text]),
    FieldDef::new("22A", "Type of Operation", "4!c", &[Code]),
    FieldDef::new(
        "22C",
        "Common Reference",
        "4!a2!c4!n4!a2!c",
        &[Code, Code, Number, Code, Code],
    ),
    FieldDef::new("23B", "Bank Operation Code", "4!c", &[Code]),
    FieldDef::new("23E", "Instruction Code", "4!c[/30x]", &[Code, Text]),
    FieldDef::new("25", "Account Identification", "35x", &[Account]),
    FieldDef::new("26T", "Transaction Type Code", "3!c", &[Code]),
    FieldDef::new(
        "28C",
        "Statement Number/Sequence Number",
        "5n[/5n]",
        &[Number, Number],
    ),
    FieldDef::new("28D", "Message Index/Total", "5n/5n", &[Number, Number]),
    FieldDef::new("30", "Value Date", "6!n", &[Date]),
    FieldDef::new("30T", "Trade Date", "8!n", &[Date]),
    FieldDef::new("30V", "Value Date", "8!n", &[Date]),
    FieldDef::new(
        "32A",
        "Value Date/Currency/Amount",
        "6!n3!a15d",
        &[Date, Currency, Amount],
    ),
    FieldDef::new(
        "32B",
        "Currency/Amount",
        CURRENCY_AMOUNT_FORMAT,
        CURRENCY_AMOUNT,
    ),
    FieldDef::new(
        "33B",
        "Currency/Instructed Amount",
        CURRENCY_AMOUNT_FORMAT,
        CURRENCY_AMOUNT,
    ),
    FieldDef::new(
        "34F",
        "Floor Limit Indicator",
        "3!a[1!a]15d",
        &[Currency, Code, Amount],
    ),
    FieldDef::new("36", "Exchange Rate", "12d", &[Amount]),
    FieldDef::verbatim(
        "50A",
        "Ordering Customer",
        CUSTOMER_BIC_FORMAT,
        CUSTOMER_BIC,
    ),
    FieldDef::verbatim(
        "50F",
        "Ordering Customer",
        "35x$4*35x",
        &[Account, Text],
    ),
    FieldDef::verbatim(
        "50K",
        "Ordering Customer",
        CUSTOMER_NAME_FORMAT,
        CUSTOMER_NAME,
    ),
    FieldDef::verbatim(
        "51A",
        "Sending Institution",
        PARTY_BIC_FORMAT,
        PARTY_BIC,
    ),
    FieldDef::verbatim(
        "52A",
        "Ordering Institution",
        PARTY_BIC_FORMAT,
        PARTY_BIC,
    ),
    FieldDef::verbatim(
        "52D",
        "Ordering Institution",
        PARTY_NAME_FORMAT,
        PARTY_NAME,
    ),
    FieldDef::verbatim(
        "53A",
        "Sender's Correspondent",
        PARTY_BIC_FORMAT,
        PARTY_BIC,
    ),
    FieldDef::verbatim(
        "53B",
        "Sender's Correspondent",
        PARTY_LOCATION_FORMAT,
        PARTY_LOCATION,
    ),
    FieldDef::verbatim(
        "53D",
        "Sender's Correspondent",
        PARTY_NAME_FORMAT,
        PARTY_NAME,
    ),
    FieldDef::verbatim(
        "54A",
        "Receiver's Correspondent",
        PARTY_BIC_FORMAT,
        PARTY_BIC,
    ),
    FieldDef::verbatim(
        "54B",
        "Receiver's Correspondent",
        PARTY_LOCATION_FORMAT,
        PARTY_LOCATION,
    ),
    FieldDef::verbatim(
        "54D",
        "Receiver's Correspondent",
        PARTY_NAME_FORMAT,
        PARTY_NAME,
    ),
    FieldDef::verbatim(
        "55A",
        "Third Reimbursement Institution",
        PARTY_BIC_FORMAT,
        PARTY_BIC,
    ),
    FieldDef::verbatim(
        "55B",
        "Third Reimbursement Institution",
        PARTY_LOCATION_FORMAT,
        PARTY_LOCATION,
    ),
    FieldDef::verbatim(
        "55D",
        "Third Reimbursement Institution",
        PARTY_NAME_FORMAT,
        PARTY_NAME,
    ),
    FieldDef::verbatim(
        "56A",
        "Intermediary Institution",
        PARTY_BIC_FORMAT,
        PARTY_BIC,
    ),
    FieldDef::new("56C", "Intermediary Institution", "/34x", &[Account]),
    FieldDef::verbatim(
        "56D",
        "Intermediary Institution",
        PARTY_NAME_FORMAT,
        PARTY_NAME,
    ),
    FieldDef::verbatim(
        "57A",
        "Account With Institution",
        PARTY_BIC_FORMAT,
        PARTY_BIC,
    ),
    FieldDef::verbatim(
        "57B",
        "Account With Institution",
        PARTY_LOCATION_FORMAT,
        PARTY_LOCATION,
    ),
    FieldDef::new("57C", "Account With Institution", "/34x", &[Account]),
    FieldDef::verbatim(
        "57D",
        "Account With Institution",
        PARTY_NAME_FORMAT,
        PARTY_NAME,
    ),
    FieldDef::verbatim(
        "58A",
        "Beneficiary Institution",
        PARTY_BIC_FORMAT,
        PARTY_BIC,
    ),
    FieldDef::verbatim(
        "58D",
        "Beneficiary Institution",
        PARTY_NAME_FORMAT,
        PARTY_NAME,
    ),
    FieldDef::verbatim(
        "59",
        "Beneficiary Customer",
        CUSTOMER_NAME_FORMAT,
        CUSTOMER_NAME,
    ),
    FieldDef::verbatim(
        "59A",
        "Beneficiary Customer",
        CUSTOMER_BIC_FORMAT,
        CUSTOMER_BIC,
    ),
    FieldDef::verbatim(
        "59F",
        "Beneficiary Customer",
        CUSTOMER_NAME_FORMAT,
        CUSTOMER_NAME,
    ),
    FieldDef::new("60F", "Opening Balance", BALANCE_FORMAT, BALANCE),
    FieldDef::new("60M", "Intermediate Opening Balance", BALANCE_FORMAT, BALANCE),
    FieldDef::new(
        "61",
        "Statement Line",
        "6!n[4!n]2a[1!a]15d1!a3!c16x[//16x][$34x]",
        &[Date, Code, Code, Code, Amount, Code, Code, Text, Text, Text],
    )
    .with_codes(STATEMENT_MARKS),
    FieldDef::new(
        "62F",
        "Closing Balance (Booked Funds)",
        BALANCE_FORMAT,
        BALANCE,
    ),
    FieldDef::new(
        "62M",
        "Intermediate Closing Balance",
        BALANCE_FORMAT,
        BALANCE,
    ),
    FieldDef::new(
        "64",
        "Closing Available Balance (Available Funds)",
        BALANCE_FORMAT,
        BALANCE,
    ),
    FieldDef::new(
        "65",
        "Forward Available Balance",
        BALANCE_FORMAT,
        BALANCE,
    ),
    FieldDef::verbatim("70", "Remittance Information", "4*35x", &[Text]),
    FieldDef::new("71A", "Details of Charges", "3!a", &[Code]),
    FieldDef::new(
        "71F",
        "Sender's Charges",
        CURRENCY_AMOUNT_FORMAT,
        CURRENCY_AMOUNT,
    ),
    FieldDef::new(
        "71G",
        "Receiver's Charges",
        CURRENCY_AMOUNT_FORMAT,
        CURRENCY_AMOUNT,
    ),
    FieldDef::verbatim("72", "Sender to Receiver Information", "6*35x", &[Text]),
    FieldDef::verbatim("77B", "Regulatory Reporting", "3*35x", &[Text]),
    FieldDef::verbatim("77T", "Envelope Contents", "9000z", &[Text]),
    FieldDef::verbatim("79", "Narrative", "35*50x", &[Text]),
    FieldDef::verbatim("82A", "Party A", PARTY_BIC_FORMAT, PARTY_BIC),
    FieldDef::verbatim("86", "Information to Account Owner", "6*65x", &[Text]),
    FieldDef::verbatim("87A", "Party B", PARTY_BIC_FORMAT, PARTY_BIC),
    FieldDef::new(
        "90C",
        "Number and Sum of Credits",
        "5n3!a15d",
        &[Number, Currency, Amount],
    ),
    FieldDef::new(
        "90D",
        "Number and Sum of Debits",
        "5n3!a15d",
        &[Number, Currency, Amount],
    ),
    FieldDef::new("94A", "Scope of Operation", "4!c", &[Code]),
    // MT0xx system messages carry their text block in brace form.
    FieldDef::new("108", "Message User Reference", "16x", &[Text]),
    FieldDef::new("175", "Time", "4!n", &[Time]),
    FieldDef::new("177", "Date and Time", "6!n4!n", &[Date, Time]),
    FieldDef::new("405", "Reason for Rejection", "3!c", &[Code]),
    FieldDef::new("431", "Message Status", "2!n", &[Code]),
    FieldDef::new("451", "Accept/Reject", "1!n", &[Code]),
];

/// Labels that differ from the generic one for specific message types.
pub static LABEL_OVERRIDES: &[LabelOverride] = &[
    LabelOverride {
        tag: "20",
        message_type: "103",
        label: "Sender's Reference",
    },
    LabelOverride {
        tag: "20",
        message_type: "300",
        label: "Sender's Reference",
    },
    LabelOverride {
        tag: "32B",
        message_type: "300",
        label: "Currency/Amount Bought",
    },
    LabelOverride {
        tag: "33B",
        message_type: "300",
        label: "Currency/Amount Sold",
    },
    LabelOverride {
        tag: "32A",
        message_type: "900",
        label: "Value Date, Currency Code, Amount",
    },
    LabelOverride {
        tag: "32A",
        message_type: "910",
        label: "Value Date, Currency Code, Amount",
    },
    LabelOverride {
        tag: "79",
        message_type: "999",
        label: "Narrative (Free Format)",
    },
];
