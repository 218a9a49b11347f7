/// CP437 character name table.
///
/// Maps each code point of the IBM PC code page to a descriptive label: the
/// control range keeps its mnemonic alongside the glyph CP437 actually
/// displays for it, the printable ASCII range is spelled out, and the
/// extended range names the accented Latin, box-drawing, Greek and math
/// glyphs.
static CP437_NAMES: [&str; 256] = [
    // Control characters (0-31)
    "NUL (Null)",
    "SOH (Start of Heading) - White Smiley ☺",
    "STX (Start of Text) - Black Smiley ☻",
    "ETX (End of Text) - Heart ♥",
    "EOT (End of Transmission) - Diamond ♦",
    "ENQ (Enquiry) - Club ♣",
    "ACK (Acknowledge) - Spade ♠",
    "BEL (Bell) - Bullet •",
    "BS (Backspace) - Inverse Bullet ◘",
    "HT (Horizontal Tab) - Hollow Circle ○",
    "LF (Line Feed) - Inverse Circle ◙",
    "VT (Vertical Tab) - Male Symbol ♂",
    "FF (Form Feed) - Female Symbol ♀",
    "CR (Carriage Return) - Music Note ♪",
    "SO (Shift Out) - Double Music Note ♫",
    "SI (Shift In) - Sun ☼",
    "DLE (Data Link Escape) - Right Arrow ►",
    "DC1 (Device Control 1) - Left Arrow ◄",
    "DC2 (Device Control 2) - Up/Down Arrow ↕",
    "DC3 (Device Control 3) - Double Exclamation ‼",
    "DC4 (Device Control 4) - Pilcrow ¶",
    "NAK (Negative Acknowledge) - Section §",
    "SYN (Synchronous Idle) - Solid Rectangle ▬",
    "ETB (End of Transmission Block) - Up/Down Arrow ↨",
    "CAN (Cancel) - Up Arrow ↑",
    "EM (End of Medium) - Down Arrow ↓",
    "SUB (Substitute) - Right Arrow →",
    "ESC (Escape) - Left Arrow ←",
    "FS (File Separator) - Right Angle ∟",
    "GS (Group Separator) - Left/Right Arrow ↔",
    "RS (Record Separator) - Up Triangle ▲",
    "US (Unit Separator) - Down Triangle ▼",
    // Printable ASCII (32-126)
    "' ' (Space)",
    "'!' (Exclamation Mark)",
    "'\"' (Double Quote)",
    "'#' (Hash)",
    "'$' (Dollar Sign)",
    "'%' (Percent)",
    "'&' (Ampersand)",
    "''' (Apostrophe)",
    "'(' (Open Parenthesis)",
    "')' (Close Parenthesis)",
    "'*' (Asterisk)",
    "'+' (Plus Sign)",
    "',' (Comma)",
    "'-' (Hyphen)",
    "'.' (Period)",
    "'/' (Slash)",
    "'0' (Digit Zero)",
    "'1' (Digit One)",
    "'2' (Digit Two)",
    "'3' (Digit Three)",
    "'4' (Digit Four)",
    "'5' (Digit Five)",
    "'6' (Digit Six)",
    "'7' (Digit Seven)",
    "'8' (Digit Eight)",
    "'9' (Digit Nine)",
    "':' (Colon)",
    "';' (Semicolon)",
    "'<' (Less-than)",
    "'=' (Equals)",
    "'>' (Greater-than)",
    "'?' (Question Mark)",
    "'@' (At Sign)",
    "'A' (Uppercase A)",
    "'B' (Uppercase B)",
    "'C' (Uppercase C)",
    "'D' (Uppercase D)",
    "'E' (Uppercase E)",
    "'F' (Uppercase F)",
    "'G' (Uppercase G)",
    "'H' (Uppercase H)",
    "'I' (Uppercase I)",
    "'J' (Uppercase J)",
    "'K' (Uppercase K)",
    "'L' (Uppercase L)",
    "'M' (Uppercase M)",
    "'N' (Uppercase N)",
    "'O' (Uppercase O)",
    "'P' (Uppercase P)",
    "'Q' (Uppercase Q)",
    "'R' (Uppercase R)",
    "'S' (Uppercase S)",
    "'T' (Uppercase T)",
    "'U' (Uppercase U)",
    "'V' (Uppercase V)",
    "'W' (Uppercase W)",
    "'X' (Uppercase X)",
    "'Y' (Uppercase Y)",
    "'Z' (Uppercase Z)",
    "'[' (Open Bracket)",
    "'\\' (Backslash)",
    "']' (Close Bracket)",
    "'^' (Caret)",
    "'_' (Underscore)",
    "'`' (Grave Accent)",
    "'a' (Lowercase a)",
    "'b' (Lowercase b)",
    "'c' (Lowercase c)",
    "'d' (Lowercase d)",
    "'e' (Lowercase e)",
    "'f' (Lowercase f)",
    "'g' (Lowercase g)",
    "'h' (Lowercase h)",
    "'i' (Lowercase i)",
    "'j' (Lowercase j)",
    "'k' (Lowercase k)",
    "'l' (Lowercase l)",
    "'m' (Lowercase m)",
    "'n' (Lowercase n)",
    "'o' (Lowercase o)",
    "'p' (Lowercase p)",
    "'q' (Lowercase q)",
    "'r' (Lowercase r)",
    "'s' (Lowercase s)",
    "'t' (Lowercase t)",
    "'u' (Lowercase u)",
    "'v' (Lowercase v)",
    "'w' (Lowercase w)",
    "'x' (Lowercase x)",
    "'y' (Lowercase y)",
    "'z' (Lowercase z)",
    "'{' (Open Curly Brace)",
    "'|' (Vertical Bar)",
    "'}' (Close Curly Brace)",
    "'~' (Tilde)",
    "DEL (Delete)",
    // Extended CP437 (128-255)
    "Ç (Latin Capital C with Cedilla)",
    "ü (Latin Small U with Diaeresis)",
    "é (Latin Small E with Acute)",
    "â (Latin Small A with Circumflex)",
    "ä (Latin Small A with Diaeresis)",
    "à (Latin Small A with Grave)",
    "å (Latin Small A with Ring)",
    "ç (Latin Small C with Cedilla)",
    "ê (Latin Small E with Circumflex)",
    "ë (Latin Small E with Diaeresis)",
    "è (Latin Small E with Grave)",
    "ï (Latin Small I with Diaeresis)",
    "î (Latin Small I with Circumflex)",
    "ì (Latin Small I with Grave)",
    "Ä (Latin Capital A with Diaeresis)",
    "Å (Latin Capital A with Ring)",
    "É (Latin Capital E with Acute)",
    "æ (Latin Small Ae)",
    "Æ (Latin Capital Ae)",
    "ô (Latin Small O with Circumflex)",
    "ö (Latin Small O with Diaeresis)",
    "ò (Latin Small O with Grave)",
    "û (Latin Small U with Circumflex)",
    "ù (Latin Small U with Grave)",
    "ÿ (Latin Small Y with Diaeresis)",
    "Ö (Latin Capital O with Diaeresis)",
    "Ü (Latin Capital U with Diaeresis)",
    "¢ (Cent Sign)",
    "£ (Pound Sign)",
    "¥ (Yen Sign)",
    "₧ (Peseta Sign)",
    "ƒ (Latin Small F with Hook)",
    "á (Latin Small A with Acute)",
    "í (Latin Small I with Acute)",
    "ó (Latin Small O with Acute)",
    "ú (Latin Small U with Acute)",
    "ñ (Latin Small N with Tilde)",
    "Ñ (Latin Capital N with Tilde)",
    "ª (Feminine Ordinal Indicator)",
    "º (Masculine Ordinal Indicator)",
    "¿ (Inverted Question Mark)",
    "⌐ (Negation)",
    "¬ (Not Sign)",
    "½ (Vulgar Fraction One Half)",
    "¼ (Vulgar Fraction One Quarter)",
    "¡ (Inverted Exclamation Mark)",
    "« (Left-Pointing Double Angle Quotation Mark)",
    "» (Right-Pointing Double Angle Quotation Mark)",
    "░ (Light Shade)",
    "▒ (Medium Shade)",
    "▓ (Dark Shade)",
    "│ (Box Drawings Light Vertical)",
    "┤ (Box Drawings Light Vertical and Left)",
    "╡ (Box Drawings Vertical Single and Left Double)",
    "╢ (Box Drawings Vertical Double and Left Single)",
    "╖ (Box Drawings Down Double and Left Single)",
    "╕ (Box Drawings Down Single and Left Double)",
    "╣ (Box Drawings Vertical Double and Left Single)",
    "║ (Box Drawings Double Vertical)",
    "╗ (Box Drawings Double Down and Left)",
    "╝ (Box Drawings Double Up and Left)",
    "╜ (Box Drawings Up Double and Left Single)",
    "╛ (Box Drawings Up Single and Left Double)",
    "┐ (Box Drawings Light Down and Left)",
    "└ (Box Drawings Light Up and Right)",
    "┴ (Box Drawings Light Up and Horizontal)",
    "┬ (Box Drawings Light Down and Horizontal)",
    "├ (Box Drawings Light Vertical and Right)",
    "─ (Box Drawings Light Horizontal)",
    "┼ (Box Drawings Light Vertical and Horizontal)",
    "╞ (Box Drawings Vertical Single and Right Double)",
    "╟ (Box Drawings Vertical Double and Right Single)",
    "╚ (Box Drawings Double Up and Right)",
    "╔ (Box Drawings Double Down and Right)",
    "╩ (Box Drawings Double Up and Horizontal)",
    "╦ (Box Drawings Double Down and Horizontal)",
    "╠ (Box Drawings Double Vertical and Right)",
    "═ (Box Drawings Double Horizontal)",
    "╬ (Box Drawings Double Vertical and Horizontal)",
    "╧ (Box Drawings Up Single and Horizontal Double)",
    "╨ (Box Drawings Up Double and Horizontal Single)",
    "╤ (Box Drawings Down Single and Horizontal Double)",
    "╥ (Box Drawings Down Double and Horizontal Single)",
    "╙ (Box Drawings Up Double and Right Single)",
    "╘ (Box Drawings Up Single and Right Double)",
    "╒ (Box Drawings Down Single and Right Double)",
    "╓ (Box Drawings Down Double and Right Single)",
    "╫ (Box Drawings Vertical Double and Horizontal Single)",
    "╪ (Box Drawings Vertical Single and Horizontal Double)",
    "┘ (Box Drawings Light Up and Left)",
    "┌ (Box Drawings Light Down and Right)",
    "█ (Full Block)",
    "▄ (Lower Half Block)",
    "▌ (Left Half Block)",
    "▐ (Right Half Block)",
    "▀ (Upper Half Block)",
    "α (Greek Small Alpha)",
    "ß (Latin Small Sharp S)",
    "Γ (Greek Capital Gamma)",
    "π (Greek Small Pi)",
    "Σ (Greek Capital Sigma)",
    "σ (Greek Small Sigma)",
    "µ (Micro Sign)",
    "τ (Greek Small Tau)",
    "Φ (Greek Capital Phi)",
    "Θ (Greek Capital Theta)",
    "Ω (Greek Capital Omega)",
    "δ (Greek Small Delta)",
    "∞ (Infinity)",
    "φ (Greek Small Phi)",
    "ε (Greek Small Epsilon)",
    "∩ (Intersection)",
    "≡ (Identical To)",
    "± (Plus-Minus Sign)",
    "≥ (Greater-Than or Equal To)",
    "≤ (Less-Than or Equal To)",
    "⌠ (Top Half Integral)",
    "⌡ (Bottom Half Integral)",
    "÷ (Division Sign)",
    "≈ (Almost Equal To)",
    "° (Degree Sign)",
    "· (Middle Dot)",
    "· (Middle Dot)",
    "√ (Square Root)",
    "ⁿ (Superscript Latin Small N)",
    "² (Superscript Two)",
    "■ (Black Square)",
    "nbsp (Non-breaking Space)",
];

/// Label for a glyph index. Indices past the code page fall back to a
/// generic "Character N" label.
pub fn label_for(index: usize) -> String {
    match CP437_NAMES.get(index) {
        Some(name) => (*name).to_string(),
        None => format!("Character {}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_null() {
        assert_eq!(label_for(0), "NUL (Null)");
    }

    #[test]
    fn test_label_uppercase_a() {
        assert_eq!(label_for(65), "'A' (Uppercase A)");
    }

    #[test]
    fn test_label_extended_range() {
        assert_eq!(label_for(128), "Ç (Latin Capital C with Cedilla)");
        assert_eq!(label_for(219), "█ (Full Block)");
        assert_eq!(label_for(255), "nbsp (Non-breaking Space)");
    }

    #[test]
    fn test_label_fallback_past_table() {
        assert_eq!(label_for(256), "Character 256");
        assert_eq!(label_for(300), "Character 300");
    }
}
