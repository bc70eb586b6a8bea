//! Embedded sample payload.

/// A position event as emitted by the tracking backend.
pub const SAMPLE_POSITION: &str = r#"{"Id":1,"IdEvento":123,"EventoDatahora":"2020-11-17T14:09:48.889Z", "Rastreador": {"Id":12,"IdVeiculo":2951,"NumeroSerial":"863586039137157","IdInstalacaoTipo":16,"IdEquipamentoTipo":1,"Situacao":{"Ignicao":true,"SituacaoEquipamento":0,"Texto":null,"Entrada1":true,"Entrada2":true,"Entrada3":true,"Entrada4":true,"Entrada5":true,"Entrada6":true,"Entrada7":true,"Entrada8":true},"IdPosicao":876844308}}"#;
