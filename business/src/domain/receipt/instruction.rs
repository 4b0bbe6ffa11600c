/// Instruction sent with every receipt image.
///
/// The reply contract is a single JSON object in one of the two shapes below;
/// anything else is treated as an unparseable reply.
pub const RECEIPT_INSTRUCTION: &str = r#"You are reading a photo of a restaurant receipt.
Extract exactly these three amounts:
1. totalAmount: the final amount to pay
2. preTaxAmount: the subtotal before tax
3. serviceFee: the sum of any mandatory service charges or delivery fees added before tax (0 if there are none)

Reply with a single JSON object in exactly this format:
{"totalAmount": number, "preTaxAmount": number, "serviceFee": number, "success": true}

If the amounts cannot be read clearly from the receipt, reply with:
{"success": false, "error": "Unable to parse receipt clearly"}

Reply with the JSON object only, no other text."#;
