/// Seller details printed at the top of every invoice. Compile-time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letterhead {
    pub company_name: &'static str,
    pub gstin: &'static str,
    /// First line is printed after "Address:", the rest on their own lines.
    pub address_lines: &'static [&'static str],
    pub support_email: &'static str,
}

/// The issuing company.
pub const LETTERHEAD: Letterhead = Letterhead {
    company_name: "TSMC Creations India Pvt.Ltd.",
    gstin: "33AAJCT3867G1Z4",
    address_lines: &["Chennai, Tamil Nadu - 600096", "India"],
    support_email: "support@lifedemy.in",
};

impl Letterhead {
    /// Detail lines under the company name, in print order.
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("GSTIN: {}", self.gstin)];
        let mut address = self.address_lines.iter();
        if let Some(first) = address.next() {
            lines.push(format!("Address: {first}"));
        }
        lines.extend(address.map(|l| l.to_string()));
        lines.push(format!("Email: {}", self.support_email));
        lines
    }
}
