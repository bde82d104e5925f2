#![allow(dead_code)]

/// Encodes `www.example.com` as uncompressed length-prefixed labels.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0x00);
    out
}

/// Builds raw DNS messages section by section with header counts kept in sync.
pub struct MessageBuilder {
    id: u16,
    flags: u16,
    questions: Vec<Vec<u8>>,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
}

impl MessageBuilder {
    pub fn query() -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            questions: Vec::new(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        let mut q = encode_name(name);
        q.extend_from_slice(&qtype.to_be_bytes());
        q.extend_from_slice(&1u16.to_be_bytes());
        self.questions.push(q);
        self
    }

    pub fn answer_a(mut self, name: &str, ip: [u8; 4]) -> Self {
        self.answers.push(record(&encode_name(name), 1, 1, 300, &ip));
        self
    }

    pub fn authority_ns(mut self, zone: &str, target: &str) -> Self {
        self.authorities
            .push(record(&encode_name(zone), 2, 1, 3600, &encode_name(target)));
        self
    }

    pub fn additional_a(mut self, name: &str, ip: [u8; 4]) -> Self {
        self.additionals
            .push(record(&encode_name(name), 1, 1, 300, &ip));
        self
    }

    /// EDNS0 OPT record with the given option payload.
    pub fn opt(mut self, rdata: &[u8]) -> Self {
        self.additionals.push(record(&[0x00], 41, 4096, 0, rdata));
        self
    }

    /// A TYPE 41 record whose owner is not the root.
    pub fn non_root_type_41(mut self, name: &str) -> Self {
        self.additionals
            .push(record(&encode_name(name), 41, 4096, 0, &[]));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        for section in [
            &self.questions,
            &self.answers,
            &self.authorities,
            &self.additionals,
        ] {
            buf.extend_from_slice(&(section.len() as u16).to_be_bytes());
        }
        for section in [
            &self.questions,
            &self.answers,
            &self.authorities,
            &self.additionals,
        ] {
            for entry in section {
                buf.extend_from_slice(entry);
            }
        }
        buf
    }
}

fn record(owner: &[u8], rr_type: u16, class: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut rr = owner.to_vec();
    rr.extend_from_slice(&rr_type.to_be_bytes());
    rr.extend_from_slice(&class.to_be_bytes());
    rr.extend_from_slice(&ttl.to_be_bytes());
    rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    rr.extend_from_slice(rdata);
    rr
}
