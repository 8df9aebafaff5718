/*!
# `END`

## Purpose
Stops the program.

## Remarks
Running past the last line also stops the program.

## Example
```text
10 PRINT "DONE"
20 END
30 PRINT "NEVER"
RUN
DONE
```

*/
